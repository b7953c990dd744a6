//! Compiled-in site content.
//!
//! Everything here is `'static` reference data; nothing is created or
//! mutated at runtime.

mod posts;
mod sections;

use std::fmt;

pub use posts::{BlogPost, POSTS, find_post, latest_posts};
pub use sections::{
    EXPERTISE, ExpertisePillar, Glyph, PORTFOLIO, PROCESS, ProcessStep, Project, SERVICES,
    STATS, Service, Stat, TESTIMONIALS, Testimonial,
};

/// Blog post identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(pub u32);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PostId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
