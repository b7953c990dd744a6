//! View controller: sole owner and mutator of the site's view state.
//!
//! # Navigation graph
//!
//! ```text
//!            go_home / Navigate(home|services|contact)
//!     ┌────────────────────────────────────────────────┐
//!     v                                                │
//!   Home ──── go_to_blog_list / Navigate(blog) ──► BlogList
//!     │                                               │  ^
//!     │ select_post(id)            select_post(id)    │  │ go_to_blog_list
//!     │                                               v  │ select_post(unknown)
//!     └──────────────────────────────────────────► PostDetail(id)
//! ```
//!
//! Every edge is reachable from every state; there is no terminal state.

use crate::blocks::{self, ContentBlock};
use crate::content::{self, BlogPost, PostId};
use crate::error::NavigationError;
use crate::intent::{Anchor, NavIntent, NavMessage};
use crate::view::{View, ViewMode};

/// Result of applying one message.
///
/// The front end resets the scroll position on every transition, then
/// scrolls `anchor` into view when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: View,
    pub to: View,
    pub anchor: Option<Anchor>,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the current [`View`] and the post catalog it resolves ids against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewController {
    view: View,
    posts: &'static [BlogPost],
}

impl ViewController {
    /// Controller over the bundled posts, starting at the home view.
    pub fn new() -> Self {
        Self::with_posts(content::POSTS)
    }

    pub fn with_posts(posts: &'static [BlogPost]) -> Self {
        Self {
            view: View::Home,
            posts,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn selected_post(&self) -> Option<PostId> {
        self.view.selected_post()
    }

    /// Static record of the selected post, if a post is open.
    pub fn current_post(&self) -> Option<&'static BlogPost> {
        self.selected_post().and_then(|id| self.resolve(id).ok())
    }

    /// Blocks to render for the current view.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        blocks::plan(self.view)
    }

    pub fn go_home(&mut self) -> Transition {
        self.transition(View::Home, None)
    }

    pub fn go_to_blog_list(&mut self) -> Transition {
        self.transition(View::BlogList, None)
    }

    /// Open post `id`. Unknown ids fall back to the blog list.
    pub fn select_post(&mut self, id: PostId) -> Transition {
        match self.resolve(id) {
            Ok(post) => self.transition(View::PostDetail(post.id), None),
            Err(err) => {
                log::warn!("{err}; showing blog list");
                self.transition(View::BlogList, None)
            }
        }
    }

    pub fn on_navigation_request(&mut self, target: NavIntent) -> Transition {
        let next = match target {
            NavIntent::Home | NavIntent::Services | NavIntent::Contact => View::Home,
            NavIntent::Blog => View::BlogList,
        };
        self.transition(next, target.anchor())
    }

    pub fn dispatch(&mut self, message: NavMessage) -> Transition {
        match message {
            NavMessage::GoHome => self.go_home(),
            NavMessage::GoToBlogList => self.go_to_blog_list(),
            NavMessage::SelectPost(id) => self.select_post(id),
            NavMessage::Navigate(target) => self.on_navigation_request(target),
        }
    }

    fn resolve(&self, id: PostId) -> Result<&'static BlogPost, NavigationError> {
        content::find_post(self.posts, id).ok_or(NavigationError::InvalidSelection(id))
    }

    fn transition(&mut self, to: View, anchor: Option<Anchor>) -> Transition {
        let from = std::mem::replace(&mut self.view, to);
        log::debug!("view {from} -> {to}");
        Transition { from, to, anchor }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_starts_home() {
        let c = ViewController::new();
        assert_eq!(c.view(), View::Home);
        assert_eq!(c.selected_post(), None);
        assert!(c.current_post().is_none());
    }

    #[test]
    fn test_select_post_supplies_content() {
        let mut c = ViewController::new();
        let t = c.select_post(PostId(2));
        assert_eq!(t.to, View::PostDetail(PostId(2)));
        assert_eq!(
            c.current_post().map(|p| p.title),
            Some("Common Structural Issues in Victorian Terraces")
        );
    }

    #[test]
    fn test_unknown_post_falls_back() {
        let mut c = ViewController::new();
        c.select_post(PostId(1));
        let t = c.select_post(PostId(42));
        assert_eq!(t.from, View::PostDetail(PostId(1)));
        assert_eq!(t.to, View::BlogList);
        assert!(c.current_post().is_none());
    }

    #[test]
    fn test_empty_catalog_rejects_everything() {
        let mut c = ViewController::with_posts(&[]);
        assert_eq!(c.select_post(PostId(1)).to, View::BlogList);
    }

    #[test]
    fn test_intent_anchors() {
        let mut c = ViewController::new();
        c.go_to_blog_list();
        let t = c.on_navigation_request(NavIntent::Contact);
        assert_eq!(t.to, View::Home);
        assert_eq!(t.anchor, Some(Anchor::Contact));
        assert_eq!(c.on_navigation_request(NavIntent::Blog).anchor, None);
    }

    #[test]
    fn test_transition_changed() {
        let mut c = ViewController::new();
        assert!(!c.go_home().changed());
        assert!(c.go_to_blog_list().changed());
        assert!(!c.go_to_blog_list().changed());
    }

    #[test]
    fn test_blocks_follow_view() {
        let mut c = ViewController::new();
        c.dispatch(NavMessage::SelectPost(PostId(3)));
        assert!(c.blocks().contains(&ContentBlock::PostDetail(PostId(3))));
        c.dispatch(NavMessage::GoHome);
        assert!(c.blocks().contains(&ContentBlock::Hero));
    }
}
