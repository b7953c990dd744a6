use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::EXPERTISE;
use weldon_core::{NavIntent, NavMessage};

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::EXPERTISE_IMAGE;

/// "Why choose us" panel on the dark background.
#[component]
pub fn Expertise() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let standards = ctx.send(NavMessage::Navigate(NavIntent::Services));

    view! {
        <section id="expertise" class=css::sectionDark>
            <div class=css::blueprintLight></div>

            <div class=css::expertiseGrid>
                <div class=css::expertiseImage>
                    <img
                        class=css::cover
                        src=EXPERTISE_IMAGE
                        alt="The Standard"
                        referrerpolicy="no-referrer"
                    />
                </div>

                <div class=css::expertiseCopy>
                    <div class=css::pillLight>"Why Choose Us"</div>
                    <h2 class=css::headingLight>
                        "Independent Advice, " <br />
                        <span class=css::italic>"Professional"</span>
                        " Integrity."
                    </h2>
                    <p class=css::ledeLight>
                        "Our small team comprises a combined 70+ years experience, providing \
                         approachable and expert guidance for home buyers and owners."
                    </p>

                    <div class=css::pillars>
                        {EXPERTISE
                            .iter()
                            .map(|pillar| view! {
                                <div class=css::pillar>
                                    <div class=css::pillarIcon>
                                        <Icon icon=ic::glyph(pillar.glyph) />
                                    </div>
                                    <div>
                                        <h4 class=css::pillarTitle>{pillar.title}</h4>
                                        <p class=css::pillarText>{pillar.description}</p>
                                    </div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <button class=css::btnAccent on:click=move |_| standards.run(())>
                        "Learn About Our Standards"
                        <Icon icon=ic::ARROW_RIGHT width="14" height="14" />
                    </button>
                </div>
            </div>
        </section>
    }
}
