//! Render plan: which content blocks a view shows, in order.

use crate::content::PostId;
use crate::view::View;

/// A presentational block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentBlock {
    Nav,
    Hero,
    Stats,
    Process,
    Services,
    Portfolio,
    Expertise,
    Testimonials,
    /// Latest posts on the home page.
    BlogTeaser,
    /// Every post, on the blog view.
    BlogIndex,
    PostDetail(PostId),
    /// Call to action with the contact form.
    Contact,
    Footer,
}

const HOME_BODY: [ContentBlock; 9] = [
    ContentBlock::Hero,
    ContentBlock::Stats,
    ContentBlock::Process,
    ContentBlock::Services,
    ContentBlock::Portfolio,
    ContentBlock::Expertise,
    ContentBlock::Testimonials,
    ContentBlock::BlogTeaser,
    ContentBlock::Contact,
];

/// Blocks to render for `view`. Nav comes first and the footer last in
/// every view; the contact block is always present.
pub fn plan(view: View) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::Nav];
    match view {
        View::Home => blocks.extend(HOME_BODY),
        View::BlogList => blocks.extend([ContentBlock::BlogIndex, ContentBlock::Contact]),
        View::PostDetail(id) => {
            blocks.extend([ContentBlock::PostDetail(id), ContentBlock::Contact])
        }
    }
    blocks.push(ContentBlock::Footer);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_plan() {
        let blocks = plan(View::Home);
        assert_eq!(blocks.len(), 11);
        assert_eq!(blocks[1], ContentBlock::Hero);
        assert!(blocks.contains(&ContentBlock::BlogTeaser));
        assert!(!blocks.contains(&ContentBlock::BlogIndex));
    }

    #[test]
    fn test_blog_plan() {
        assert_eq!(
            plan(View::BlogList),
            vec![
                ContentBlock::Nav,
                ContentBlock::BlogIndex,
                ContentBlock::Contact,
                ContentBlock::Footer
            ]
        );
    }

    #[test]
    fn test_detail_plan_carries_id() {
        let blocks = plan(View::PostDetail(PostId(3)));
        assert_eq!(blocks[1], ContentBlock::PostDetail(PostId(3)));
    }

    #[test]
    fn test_chrome_in_every_view() {
        for view in [View::Home, View::BlogList, View::PostDetail(PostId(1))] {
            let blocks = plan(view);
            assert_eq!(blocks.first(), Some(&ContentBlock::Nav));
            assert_eq!(blocks.last(), Some(&ContentBlock::Footer));
            assert!(blocks.contains(&ContentBlock::Contact));
        }
    }
}
