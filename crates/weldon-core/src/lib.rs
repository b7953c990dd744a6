//! Platform-free core of the Weldon Young site.
//!
//! - [`ViewController`] - owns the current [`View`] and applies [`NavMessage`]s
//! - [`blocks`] - render plan for each view
//! - [`content`] - compiled-in copy, services and blog posts
//! - [`contact`] - contact form validation and the [`InquirySink`] seam
//! - [`SiteConfig`] - business details from the bundled `site.toml`

pub mod blocks;
pub mod contact;
pub mod content;
mod controller;
pub mod error;
mod intent;
mod site;
mod view;

pub use blocks::ContentBlock;
pub use contact::{ContactForm, Inquiry, InquirySink, LogSink, PropertyType};
pub use content::{BlogPost, PostId};
pub use controller::{Transition, ViewController};
pub use error::{ConfigError, ContactError, NavigationError};
pub use intent::{Anchor, NavIntent, NavMessage};
pub use site::SiteConfig;
pub use view::{View, ViewMode};
