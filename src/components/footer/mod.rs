//! Site footer: brand blurb, contact details, navigation and office address.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::{NavIntent, NavMessage};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let site = ctx.site.get_value();

    let navigate = move |intent: NavIntent| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            ctx.dispatch(NavMessage::Navigate(intent));
        }
    };

    view! {
        <footer class=css::footer>
            <div class=css::container>
                <div class=css::grid>
                    <div class=css::brand>
                        <img class=css::logo src=site.company.logo_url.clone() alt=site.company.short_name.clone() />
                        <p class=css::summary>{site.company.summary.clone()}</p>
                        <div class=css::contacts>
                            <ContactLine
                                icon=ic::MAIL
                                label="Email Us"
                                href=site.contact.email_href()
                                text=site.contact.email.clone()
                            />
                            <ContactLine
                                icon=ic::PHONE
                                label="Call Us"
                                href=site.contact.phone_href()
                                text=site.contact.phone.clone()
                            />
                        </div>
                    </div>

                    <div class=css::columns>
                        <div>
                            <h4 class=css::columnTitle>"Navigation"</h4>
                            <ul class=css::list>
                                {NavIntent::MENU
                                    .into_iter()
                                    .map(|intent| view! {
                                        <li>
                                            <a class=css::link href=intent.href() on:click=navigate(intent)>
                                                {intent.label()}
                                            </a>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                        <div>
                            <h4 class=css::columnTitle>"Our Services"</h4>
                            <ul class=css::list>
                                {site.footer.services
                                    .iter()
                                    .map(|service| view! {
                                        <li>
                                            <a
                                                class=css::link
                                                href=NavIntent::Services.href()
                                                on:click=navigate(NavIntent::Services)
                                            >
                                                {service.clone()}
                                            </a>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                        <div>
                            <h4 class=css::columnTitle>"Office"</h4>
                            <p class=css::address>
                                {site.contact.address
                                    .iter()
                                    .map(|line| view! { {line.clone()} <br /> })
                                    .collect::<Vec<_>>()}
                            </p>
                        </div>
                    </div>
                </div>

                <div class=css::bottom>
                    <span class=css::copyright>{site.footer.copyright.clone()}</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn ContactLine(
    icon: icondata::Icon,
    label: &'static str,
    href: String,
    text: String,
) -> impl IntoView {
    view! {
        <div class=css::contact>
            <div class=css::contactIcon>
                <Icon icon=icon width="18" height="18" />
            </div>
            <div>
                <div class=css::contactLabel>{label}</div>
                <a class=css::contactLink href=href>{text}</a>
            </div>
        </div>
    }
}
