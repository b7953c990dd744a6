//! Error types for the site core.
//!
//! - [`NavigationError`] - view transitions that cannot be honoured
//! - [`ContactError`] - contact form validation and submission
//! - [`ConfigError`] - bundled site configuration

use thiserror::Error;

use crate::content::PostId;

/// Navigation errors raised while resolving a transition.
///
/// These never reach the UI: the controller recovers from them by falling
/// back to a safe view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No blog post exists for the requested id.
    #[error("no blog post with id {0}")]
    InvalidSelection(PostId),
}

/// Contact form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Name field left blank.
    #[error("please enter your name")]
    MissingName,
    /// Email field left blank.
    #[error("please enter your email address")]
    MissingEmail,
    /// Email field not an address.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    /// Unknown property type label.
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),
    /// The submission service could not accept the inquiry.
    #[error("inquiry could not be sent: {0}")]
    Unavailable(String),
}

/// Site configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into a [`SiteConfig`](crate::SiteConfig).
    #[error("invalid site config: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
