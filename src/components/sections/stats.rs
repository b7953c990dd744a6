use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::STATS;

use super::{css, to_contact};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::STATS_IMAGE;

/// About blurb with headline figures.
#[component]
pub fn Stats() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let short_name = ctx.site.with_value(|site| site.company.short_name.clone());
    let meet_team = to_contact();

    view! {
        <section class=css::section>
            <div class=css::container>
                <div class=css::intro>
                    <div class=css::pill>{format!("About {short_name}")}</div>
                    <h2 class=css::heading>
                        "Specialists in Residential Property Surveys, Damp & Timber Investigations."
                    </h2>
                    <p class=css::lede>
                        "Operating throughout London and beyond, we provide home buyers and owners \
                         with the technical clarity they need. Our reports are detailed, thorough, \
                         and designed to help you plan for the future of your property."
                    </p>
                    <button class=css::btn on:click=move |_| meet_team.run(())>
                        "Meet the Team"
                        <Icon icon=ic::ARROW_RIGHT width="14" height="14" />
                    </button>
                </div>

                <div class=css::statsGrid>
                    <div class=css::statsImage>
                        <img
                            class=css::cover
                            src=STATS_IMAGE
                            alt="Modern UK Home"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <div class=css::statCard>
                                <div class=css::statLabel>{stat.label}</div>
                                <div>
                                    <div class=css::statValue>{stat.value}</div>
                                    <p class=css::statText>{stat.description}</p>
                                </div>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
