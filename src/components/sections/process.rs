use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::PROCESS;

use super::{css, to_contact};
use crate::components::icons as ic;

/// "How it works" steps.
#[component]
pub fn Process() -> impl IntoView {
    let start = to_contact();

    view! {
        <section id="process" class=css::section>
            <div class=css::container>
                <div class=css::centered>
                    <div class=css::pill>"How It Works"</div>
                    <h2 class=css::heading>"Simple, Transparent Process"</h2>
                    <p class=css::lede>
                        "From first contact to final report, we make property surveying \
                         straightforward and stress-free."
                    </p>
                </div>

                <div class=css::processGrid>
                    <div class=css::connector></div>
                    {PROCESS
                        .iter()
                        .map(|step| view! {
                            <div class=css::step>
                                <div class=css::stepHead>
                                    <div class=css::stepIcon>
                                        <Icon icon=ic::glyph(step.glyph) width="24" height="24" />
                                    </div>
                                    <div class=css::stepNumber>{format!("STEP {}", step.number)}</div>
                                </div>
                                <h4 class=css::stepTitle>{step.title}</h4>
                                <p class=css::stepText>{step.description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class=css::actions>
                    <button class=css::btn on:click=move |_| start.run(())>
                        "Start Your Process"
                        <Icon icon=ic::ARROW_RIGHT width="14" height="14" />
                    </button>
                </div>
            </div>
        </section>
    }
}
