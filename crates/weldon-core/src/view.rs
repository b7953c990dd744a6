//! View state for the site.
//!
//! A [`View`] is the whole of the navigable state. The selected post id lives
//! inside the [`View::PostDetail`] variant, so a selection without the detail
//! mode (or the reverse) cannot be constructed.

use std::fmt;

use crate::content::PostId;

/// Discrete display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Landing page with every marketing section (default)
    #[default]
    Home,
    /// Full blog index
    BlogList,
    /// A single blog post
    PostDetail,
}

impl ViewMode {
    /// Stable lowercase name (`home`, `blog-list`, `post-detail`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::BlogList => "blog-list",
            Self::PostDetail => "post-detail",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current view, including the selected post when one is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    BlogList,
    PostDetail(PostId),
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Home => ViewMode::Home,
            Self::BlogList => ViewMode::BlogList,
            Self::PostDetail(_) => ViewMode::PostDetail,
        }
    }

    /// Selected post id. `Some` only in post-detail mode.
    pub fn selected_post(&self) -> Option<PostId> {
        match self {
            Self::PostDetail(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostDetail(id) => write!(f, "{}({})", self.mode(), id),
            _ => write!(f, "{}", self.mode()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(ViewMode::default(), ViewMode::Home);
        assert_eq!(View::default().selected_post(), None);
    }

    #[test]
    fn test_selection_only_in_detail() {
        assert_eq!(View::Home.selected_post(), None);
        assert_eq!(View::BlogList.selected_post(), None);
        let detail = View::PostDetail(PostId(2));
        assert_eq!(detail.mode(), ViewMode::PostDetail);
        assert_eq!(detail.selected_post(), Some(PostId(2)));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ViewMode::Home.as_str(), "home");
        assert_eq!(ViewMode::BlogList.as_str(), "blog-list");
        assert_eq!(ViewMode::PostDetail.as_str(), "post-detail");
    }

    #[test]
    fn test_display() {
        assert_eq!(View::BlogList.to_string(), "blog-list");
        assert_eq!(View::PostDetail(PostId(3)).to_string(), "post-detail(3)");
    }
}
