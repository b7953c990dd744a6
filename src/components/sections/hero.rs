use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, to_contact};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{HERO_AVATARS, HERO_IMAGE};

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let company = ctx.site.with_value(|site| site.company.clone());
    let get_quote = to_contact();

    view! {
        <section class=css::hero>
            <div class=css::blueprint></div>

            <div class=css::heroGrid>
                <div class=css::heroCopy>
                    <div class=css::pill>{company.tagline.clone()}</div>

                    <h1 class=css::heroTitle>
                        "Residential " <br />
                        <span class=css::accent>"Property Surveys"</span> <br />
                        "& Investigations."
                    </h1>

                    <p class=css::lede>
                        {format!(
                            "{} offers clear, independent advice on building defects and \
                             residential home surveys. Whether you're buying a property or need \
                             help diagnosing issues such as dampness, our Chartered Surveyors \
                             and Engineers can assist.",
                            company.short_name
                        )}
                    </p>

                    <div class=css::heroActions>
                        <button class=css::btn on:click=move |_| get_quote.run(())>
                            "Get a Quote"
                            <Icon icon=ic::ARROW_RIGHT width="16" height="16" />
                        </button>
                        <div class=css::proof>
                            <div class=css::avatars>
                                {HERO_AVATARS
                                    .iter()
                                    .map(|src| view! { <img class=css::avatar src=*src alt="Client" /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <span class=css::proofText>{company.experience.clone()}</span>
                        </div>
                    </div>
                </div>

                <div class=css::heroMedia>
                    <div class=css::heroFrame>
                        <img
                            class=css::cover
                            src=HERO_IMAGE
                            alt="UK Residential Property"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
