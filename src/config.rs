//! Application configuration.
//!
//! Centralizes the front end's constants. Business details (phone, address,
//! reviews) live in the core crate's bundled `site.toml`.

use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "app";

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// Layout Configuration
// =============================================================================

/// Scroll offset (px) after which the nav bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Media query matching the desktop layout; the mobile menu closes when it
/// starts matching.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Number of posts shown in the home page blog teaser.
pub const HOME_TEASER_POSTS: usize = 3;

// =============================================================================
// Imagery
// =============================================================================

/// Hero photograph.
pub const HERO_IMAGE: &str = "https://weldon-young-surveyors.argon-devsite.com/wp-content/uploads/2026/02/home-inspector-examining-exterior-house-with-clipboard-scaled.jpg";

/// Expertise section photograph.
pub const EXPERTISE_IMAGE: &str = "https://weldon-young-surveyors.argon-devsite.com/wp-content/uploads/2026/02/row-classic-victorian-era-brick-terraced-houses-residential-street-hemel-hempstead-england-scaled.jpg";

/// Stats section photograph.
pub const STATS_IMAGE: &str = "https://weldon-young-surveyors.argon-devsite.com/wp-content/uploads/2026/02/home-inspection-contractor-evaluates-house-scaled.jpg";

/// Client avatars shown beside the hero call to action.
pub const HERO_AVATARS: &[&str] = &[
    "https://picsum.photos/seed/ukuser1/100/100",
    "https://picsum.photos/seed/ukuser2/100/100",
    "https://picsum.photos/seed/ukuser3/100/100",
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
