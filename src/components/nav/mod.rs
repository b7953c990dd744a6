//! Navigation bar component.
//!
//! Fixed to the top of the page. Transparent until the window scrolls past
//! [`NAV_SCROLL_THRESHOLD`], then opaque. Below the desktop breakpoint the
//! menu collapses behind a toggle button.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_media_query, use_window_scroll};
use weldon_core::{NavIntent, NavMessage};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DESKTOP_MEDIA_QUERY, NAV_SCROLL_THRESHOLD};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let site = ctx.site.get_value();

    let menu_open = RwSignal::new(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > NAV_SCROLL_THRESHOLD);

    // Close the mobile menu when the layout switches to desktop
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move || {
        if is_desktop.get() {
            menu_open.set(false);
        }
    });

    let navigate = move |intent: NavIntent| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            menu_open.set(false);
            ctx.dispatch(NavMessage::Navigate(intent));
        }
    };

    let book_survey = move |_: MouseEvent| {
        menu_open.set(false);
        ctx.dispatch(NavMessage::Navigate(NavIntent::Contact));
    };

    let bar_class = move || {
        if scrolled.get() {
            format!("{} {}", css::bar, css::barScrolled)
        } else {
            css::bar.to_string()
        }
    };

    view! {
        <div class=css::wrapper>
            <nav class=bar_class>
                <div class=css::inner>
                    <button
                        class=css::brand
                        title="Home"
                        on:click=move |_| {
                            menu_open.set(false);
                            ctx.dispatch(NavMessage::GoHome);
                        }
                    >
                        <img class=css::logo src=site.company.logo_url.clone() alt=site.company.short_name.clone() />
                    </button>

                    <div class=css::links>
                        {NavIntent::MENU
                            .into_iter()
                            .map(|intent| view! {
                                <a class=css::link href=intent.href() on:click=navigate(intent)>
                                    {intent.label()}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                        <button class=css::cta on:click=book_survey>
                            "Book Survey"
                            <Icon icon=ic::CALENDAR width="16" height="16" />
                        </button>
                    </div>

                    <button
                        class=css::toggle
                        title="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE width="24" height="24" /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU width="24" height="24" /> }.into_any()
                        }}
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class=css::drawer>
                        {NavIntent::MENU
                            .into_iter()
                            .map(|intent| view! {
                                <a class=css::drawerLink href=intent.href() on:click=navigate(intent)>
                                    {intent.label()}
                                </a>
                            })
                            .collect::<Vec<_>>()}
                        <button class=css::drawerCta on:click=book_survey>
                            "Book Survey"
                            <Icon icon=ic::CALENDAR width="14" height="14" />
                        </button>
                    </div>
                </Show>
            </nav>
        </div>
    }
}
