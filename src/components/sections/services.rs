use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::SERVICES;
use weldon_core::Anchor;

use super::{css, to_contact};
use crate::components::icons as ic;

/// Service cards. Anchored as `#services` for the nav menu.
#[component]
pub fn Services() -> impl IntoView {
    let enquire = to_contact();
    let explore = move |ev: MouseEvent| {
        ev.prevent_default();
        enquire.run(());
    };

    view! {
        <section id=Anchor::Services.id() class=css::section>
            <div class=css::container>
                <div class=css::intro>
                    <div class=css::pill>"Our Services"</div>
                    <h2 class=css::heading>"Expert Property " <br /> "Investigations."</h2>
                    <p class=css::lede>
                        "From historic timber-framed buildings to modern developments, we provide \
                         clear, independent advice on all property types."
                    </p>
                </div>

                <div class=css::servicesGrid>
                    {SERVICES
                        .iter()
                        .map(|service| view! {
                            <div class=css::serviceCard>
                                <div class=css::serviceHead>
                                    <div class=css::serviceNumber>{service.number}</div>
                                    <div class=css::serviceIcon>
                                        <Icon icon=ic::glyph(service.glyph) width="32" height="32" />
                                    </div>
                                </div>
                                <h3 class=css::serviceTitle>{service.title}</h3>
                                <p class=css::serviceText>{service.description}</p>
                                <div class=css::tags>
                                    {service
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class=css::tag>{*tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <a class=css::serviceLink href="#contact" on:click=explore>
                                    "Explore Service"
                                    <Icon icon=ic::ARROW_RIGHT width="14" height="14" />
                                </a>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
