//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! dispatcher that turns navigation messages into view transitions.

use leptos::prelude::*;
use weldon_core::{NavMessage, SiteConfig, Transition, ViewController};

use crate::components::ViewRouter;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read from any child with
/// `use_context::<AppContext>()`. The [`ViewController`] inside is the only
/// owner of view state; components never set it directly, they send a
/// [`NavMessage`] through [`AppContext::dispatch`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view and the catalog it resolves posts against.
    pub controller: RwSignal<ViewController>,

    /// Business details from the bundled site config.
    pub site: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(ViewController::new()),
            site: StoredValue::new(SiteConfig::load()),
        }
    }

    /// Apply a navigation message and run its scroll side effects.
    ///
    /// Scroll resets to the top on every transition. When the message targets
    /// an in-page section, that section is scrolled into view on the next
    /// frame, once the new view has rendered.
    pub fn dispatch(&self, message: NavMessage) -> Option<Transition> {
        let Some(transition) = self.controller.try_update(|c| c.dispatch(message)) else {
            log::warn!("{message:?} ignored: view state already disposed");
            return None;
        };

        if !transition.changed() {
            log::debug!("{message:?} kept view {}", transition.to);
        }

        dom::scroll_to_top();
        if let Some(anchor) = transition.anchor {
            request_animation_frame(move || {
                if !dom::scroll_to_element(anchor.id()) {
                    log::warn!("section #{} not found", anchor.id());
                }
            });
        }
        Some(transition)
    }

    /// Callback that sends `message` when run, for component props.
    pub fn send(&self, message: NavMessage) -> Callback<()> {
        let ctx = *self;
        Callback::new(move |_: ()| {
            ctx.dispatch(message);
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary; a post-detail block whose post
///   cannot be resolved renders its `NavigationError` there
/// - Renders the view router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #fbfbfa;
                    color: #0f2a3d;
                    font-family: Georgia, serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #b91c1c; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0f2a3d;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 999px;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <ViewRouter />
        </ErrorBoundary>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;
    use weldon_core::{Anchor, NavIntent, View};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Scroll a page taller than the viewport down, returning the spacer.
    fn scrolled_page() -> web_sys::Element {
        let window = dom::window().unwrap();
        let document = window.document().unwrap();
        let spacer = document.create_element("div").unwrap();
        spacer.set_attribute("style", "height: 5000px").unwrap();
        document.body().unwrap().append_child(&spacer).unwrap();

        window.scroll_to_with_x_and_y(0.0, 1200.0);
        assert!(window.scroll_y().unwrap() > 0.0);
        spacer
    }

    fn scroll_y() -> f64 {
        dom::window().unwrap().scroll_y().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_dispatch_resets_scroll() {
        let spacer = scrolled_page();

        let owner = Owner::new();
        let transition = owner.with(|| AppContext::new().dispatch(NavMessage::GoToBlogList));

        assert_eq!(transition.map(|t| t.to), Some(View::BlogList));
        assert_eq!(scroll_y(), 0.0);
        spacer.remove();
    }

    #[wasm_bindgen_test]
    fn test_repeated_message_still_resets_scroll() {
        let spacer = scrolled_page();

        let owner = Owner::new();
        let transition = owner.with(|| AppContext::new().dispatch(NavMessage::GoHome));

        assert_eq!(transition.map(|t| t.changed()), Some(false));
        assert_eq!(scroll_y(), 0.0);
        spacer.remove();
    }

    #[wasm_bindgen_test]
    fn test_section_intent_resets_then_carries_anchor() {
        let spacer = scrolled_page();

        let owner = Owner::new();
        let transition = owner.with(|| {
            let ctx = AppContext::new();
            ctx.dispatch(NavMessage::GoToBlogList);
            ctx.dispatch(NavMessage::Navigate(NavIntent::Contact))
        });

        let transition = transition.unwrap();
        assert_eq!(transition.to, View::Home);
        assert_eq!(transition.anchor, Some(Anchor::Contact));
        assert_eq!(scroll_y(), 0.0);
        spacer.remove();
    }
}
