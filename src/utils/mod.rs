//! Utility modules for DOM access, logging and content rendering.
//!
//! Provides:
//! - [`dom`] - scroll helpers over `web_sys`
//! - [`logger`] - console backend for the `log` facade
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
pub mod logger;
mod markdown;

pub use markdown::markdown_to_html;
