//! Home page marketing sections.
//!
//! Each section renders compiled-in content from `weldon_core::content`.
//! Call-to-action buttons send [`NavIntent::Contact`] through the app
//! context instead of touching view state.

mod expertise;
mod hero;
mod portfolio;
mod process;
mod services;
mod stats;
mod testimonials;

use leptos::prelude::*;
use weldon_core::{NavIntent, NavMessage};

use crate::app::AppContext;

pub use expertise::Expertise;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use process::Process;
pub use services::Services;
pub use stats::Stats;
pub use testimonials::Testimonials;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Callback scrolling to the contact form, shared by the section CTAs.
fn to_contact() -> Callback<()> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    ctx.send(NavMessage::Navigate(NavIntent::Contact))
}
