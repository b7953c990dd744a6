//! UI components built with Leptos.
//!
//! - [`router`] - Renders the current view's blocks (main entry point)
//! - [`nav`] - Fixed navigation bar with mobile menu
//! - [`sections`] - Home page marketing sections
//! - [`blog`] - Blog teaser, index and post detail
//! - [`contact`] - Call to action and consultation form
//! - [`footer`] - Site footer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod blog;
pub mod contact;
pub mod footer;
pub mod icons;
pub mod nav;
pub mod router;
pub mod sections;

pub use router::ViewRouter;
