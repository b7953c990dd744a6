//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough and tables on top of CommonMark.
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;

    ammonia::clean(&render(markdown, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = markdown_to_html("Intro\n\n## Level 1\n\nBody");
        assert!(html.contains("<p>Intro</p>"));
        assert!(html.contains("<h2>Level 1</h2>"));
    }

    #[test]
    fn test_script_is_stripped() {
        let html = markdown_to_html("Hi <script>alert(1)</script>");
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_bundled_posts_render() {
        for post in weldon_core::content::POSTS {
            let html = markdown_to_html(post.body);
            assert!(html.contains("<h2>"), "post {} has no sections", post.id);
        }
    }
}
