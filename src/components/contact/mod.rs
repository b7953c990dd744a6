//! Call to action with the consultation request form.
//!
//! Anchored as `#contact`. Submission never reaches the network: the form
//! is validated by [`ContactForm::validate`] and handed to [`LogSink`].

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::{Anchor, ContactForm, InquirySink, LogSink, PropertyType};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

/// Outcome of the last submit.
#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Sent,
    Failed(String),
}

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let contact = ctx.site.with_value(|site| site.contact.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let property_type = RwSignal::new(PropertyType::default());
    let message = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            property_type: property_type.get_untracked(),
            message: message.get_untracked(),
        };

        match form.validate().and_then(|inquiry| LogSink.submit(&inquiry)) {
            Ok(()) => {
                name.set(String::new());
                email.set(String::new());
                property_type.set(PropertyType::default());
                message.set(String::new());
                notice.set(Some(Notice::Sent));
            }
            Err(err) => notice.set(Some(Notice::Failed(err.to_string()))),
        }
    };

    view! {
        <section id=Anchor::Contact.id() class=css::section>
            <div class=css::container>
                <div class=css::panel>
                    <div class=css::grid>
                        <div>
                            <h2 class=css::heading>
                                "Ready to " <br />
                                <span class=css::accent>"Secure"</span>
                                " Your Asset?"
                            </h2>
                            <p class=css::lede>
                                "Contact our team today for a free, no-obligation consultation. \
                                 We'll discuss your requirements and provide a competitive quote \
                                 within 24 hours."
                            </p>
                            <a class=css::phone href=contact.phone_href()>
                                <Icon icon=ic::PHONE width="14" height="14" />
                                {contact.phone.clone()}
                            </a>
                        </div>

                        <div class=css::card>
                            <h3 class=css::cardTitle>"Request a Consultation"</h3>
                            <form class=css::form on:submit=on_submit>
                                <div class=css::row>
                                    <div class=css::field>
                                        <label class=css::label for="contact-name">"Full Name"</label>
                                        <input
                                            id="contact-name"
                                            class=css::input
                                            type="text"
                                            placeholder="John Doe"
                                            prop:value=move || name.get()
                                            on:input=move |ev| name.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class=css::field>
                                        <label class=css::label for="contact-email">"Email Address"</label>
                                        <input
                                            id="contact-email"
                                            class=css::input
                                            type="email"
                                            placeholder="john@example.com"
                                            prop:value=move || email.get()
                                            on:input=move |ev| email.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class=css::field>
                                    <label class=css::label for="contact-property">"Property Type"</label>
                                    <select
                                        id="contact-property"
                                        class=css::input
                                        prop:value=move || property_type.get().label()
                                        on:change=move |ev| {
                                            match event_target_value(&ev).parse::<PropertyType>() {
                                                Ok(kind) => property_type.set(kind),
                                                Err(err) => log::warn!("{err}"),
                                            }
                                        }
                                    >
                                        {PropertyType::ALL
                                            .into_iter()
                                            .map(|kind| view! {
                                                <option class=css::option value=kind.label()>
                                                    {kind.label()}
                                                </option>
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </div>

                                <div class=css::field>
                                    <label class=css::label for="contact-message">"Message"</label>
                                    <textarea
                                        id="contact-message"
                                        class=css::textarea
                                        placeholder="Tell us about your property..."
                                        prop:value=move || message.get()
                                        on:input=move |ev| message.set(event_target_value(&ev))
                                    ></textarea>
                                </div>

                                {move || notice.get().map(|n| match n {
                                    Notice::Sent => view! {
                                        <p class=css::sent>"Thank you. We'll be in touch within 24 hours."</p>
                                    }.into_any(),
                                    Notice::Failed(msg) => view! {
                                        <p class=css::failed>{msg}</p>
                                    }.into_any(),
                                })}

                                <button class=css::submit type="submit">
                                    "Send Inquiry"
                                    <Icon icon=ic::ARROW_RIGHT width="14" height="14" />
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
