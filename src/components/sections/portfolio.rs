use leptos::prelude::*;
use weldon_core::content::PORTFOLIO;

use super::css;

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section class=css::sectionMuted>
            <div class=css::container>
                <div class=css::intro>
                    <div class=css::pill>"Our Work"</div>
                    <h2 class=css::heading>"From Historic to Modern."</h2>
                    <p class=css::lede>
                        "Our team provide surveys and building investigations on various property \
                         types, from 500-year-old timber-framed buildings to modern developments."
                    </p>
                </div>

                <div class=css::portfolioGrid>
                    {PORTFOLIO
                        .iter()
                        .map(|project| view! {
                            <div class=css::project>
                                <div class=css::projectImage>
                                    <img class=css::cover src=project.image alt=project.title />
                                </div>
                                <h4 class=css::projectTitle>{project.title}</h4>
                                <p class=css::projectText>{project.description}</p>
                                <p class=css::projectLocation>{project.location}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
