use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::TESTIMONIALS;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;

#[component]
pub fn Testimonials() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (short_name, reviews) = ctx
        .site
        .with_value(|site| (site.company.short_name.clone(), site.reviews.clone()));

    view! {
        <section class=css::section>
            <div class=css::container>
                <div class=css::testimonialsGrid>
                    <div>
                        <div class=css::pill>"Testimonials"</div>
                        <h2 class=css::heading>
                            "What Our " <span class=css::italic>"Clients"</span> " Say."
                        </h2>
                        <p class=css::lede>
                            {format!(
                                "Our dedication to excellence resonates with our clients. Read \
                                 firsthand accounts of their experiences with {short_name}."
                            )}
                        </p>
                        <div class=css::rating>
                            <div class=css::ratingScore>{format!("{:.1}", reviews.rating)}</div>
                            <div class=css::stars>
                                {(0..reviews.stars())
                                    .map(|_| view! { <Icon icon=ic::STAR width="16" height="16" /> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class=css::ratingCount>{format!("({} Reviews)", reviews.count)}</div>
                        </div>
                    </div>

                    <div class=css::quotes>
                        {TESTIMONIALS
                            .iter()
                            .map(|t| view! {
                                <div class=css::quote>
                                    <div class=css::quoteMark>"\u{201C}"</div>
                                    <p class=css::quoteText>{t.text}</p>
                                    <div class=css::quoteAuthor>
                                        <div class=css::quoteAvatar>
                                            <img class=css::cover src=t.image alt=t.name />
                                        </div>
                                        <div>
                                            <p class=css::quoteName>{t.name}</p>
                                            <p class=css::quoteRole>{t.role}</p>
                                        </div>
                                    </div>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
