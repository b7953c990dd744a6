//! Blog posts.

use super::PostId;

/// Blog post record.
#[derive(Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Display date, newest first in [`POSTS`].
    pub date: &'static str,
    /// Eyebrow shown above the title in the detail view.
    pub category: &'static str,
    pub image: &'static str,
    /// Markdown body.
    pub body: &'static str,
}

/// All posts, newest first.
pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: PostId(1),
        title: "Understanding RICS Home Survey Levels",
        excerpt: "Not all surveys are the same. Learn which level is right for your property purchase.",
        date: "Feb 12, 2026",
        category: "Expert Advice",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=1973&auto=format&fit=crop",
        body: include_str!("../../assets/posts/rics-survey-levels.md"),
    },
    BlogPost {
        id: PostId(2),
        title: "Common Structural Issues in Victorian Terraces",
        excerpt: "What to look out for when buying a period property in London.",
        date: "Feb 05, 2026",
        category: "Period Property",
        image: "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?q=80&w=2070&auto=format&fit=crop",
        body: include_str!("../../assets/posts/victorian-terraces.md"),
    },
    BlogPost {
        id: PostId(3),
        title: "The Importance of Damp & Timber Surveys",
        excerpt: "Why diagnosing moisture issues early can save you thousands in repairs.",
        date: "Jan 28, 2026",
        category: "Damp & Timber",
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2070&auto=format&fit=crop",
        body: include_str!("../../assets/posts/damp-and-timber.md"),
    },
];

/// Look up a post by id in `posts`.
pub fn find_post(posts: &'static [BlogPost], id: PostId) -> Option<&'static BlogPost> {
    posts.iter().find(|post| post.id == id)
}

/// The `limit` most recent posts.
pub fn latest_posts(limit: usize) -> &'static [BlogPost] {
    &POSTS[..limit.min(POSTS.len())]
}
