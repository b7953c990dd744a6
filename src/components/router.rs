//! View router component.
//!
//! Renders the render plan of the current view. There is no URL routing:
//! the [`ViewController`](weldon_core::ViewController) in
//! [`AppContext`] is the single source of truth.
//!
//! # Architecture
//!
//! - **Render plan drives the page**: blocks come from `ViewController::blocks`
//! - **Components emit messages**: every navigation goes through `AppContext::dispatch`
//! - **Post detail resolves content once**: the detail block receives the static record,
//!   or raises `NavigationError` to the app's error boundary

use leptos::prelude::*;
use weldon_core::{BlogPost, ContentBlock, NavigationError, PostId};

use crate::app::AppContext;
use crate::components::blog::{BlogIndex, BlogTeaser, PostDetail};
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::sections::{
    Expertise, Hero, Portfolio, Process, Services, Stats, Testimonials,
};

/// Main view router.
///
/// | View | Blocks |
/// |------|--------|
/// | home | nav, hero, stats, process, services, portfolio, expertise, testimonials, blog teaser, contact, footer |
/// | blog-list | nav, blog index, contact, footer |
/// | post-detail | nav, post, contact, footer |
#[component]
pub fn ViewRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let blocks = Memo::new(move |_| ctx.controller.with(|c| c.blocks()));

    view! {
        <div class="site" data-view=move || ctx.controller.with(|c| c.mode().as_str())>
            {move || {
                blocks
                    .get()
                    .into_iter()
                    .map(render_block)
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Nav => view! { <Nav /> }.into_any(),
        ContentBlock::Hero => view! { <Hero /> }.into_any(),
        ContentBlock::Stats => view! { <Stats /> }.into_any(),
        ContentBlock::Process => view! { <Process /> }.into_any(),
        ContentBlock::Services => view! { <Services /> }.into_any(),
        ContentBlock::Portfolio => view! { <Portfolio /> }.into_any(),
        ContentBlock::Expertise => view! { <Expertise /> }.into_any(),
        ContentBlock::Testimonials => view! { <Testimonials /> }.into_any(),
        ContentBlock::BlogTeaser => view! { <BlogTeaser /> }.into_any(),
        ContentBlock::BlogIndex => view! { <BlogIndex /> }.into_any(),
        ContentBlock::PostDetail(id) => {
            let ctx = use_context::<AppContext>().expect("AppContext must be provided");
            detail_post(ctx, id)
                .map(|post| view! { <PostDetail post=post /> })
                .into_any()
        }
        ContentBlock::Contact => view! { <Contact /> }.into_any(),
        ContentBlock::Footer => view! { <Footer /> }.into_any(),
    }
}

/// Post for a detail block, or the error the boundary renders.
fn detail_post(ctx: AppContext, id: PostId) -> Result<&'static BlogPost, NavigationError> {
    ctx.controller
        .with_untracked(|c| c.current_post())
        .filter(|post| post.id == id)
        .ok_or(NavigationError::InvalidSelection(id))
}

#[cfg(test)]
mod tests {
    use weldon_core::NavMessage;

    use super::*;

    #[test]
    fn test_detail_post_follows_selection() {
        Owner::new().with(|| {
            let ctx = AppContext::new();
            assert_eq!(
                detail_post(ctx, PostId(1)),
                Err(NavigationError::InvalidSelection(PostId(1)))
            );

            ctx.controller.update(|c| {
                c.dispatch(NavMessage::SelectPost(PostId(1)));
            });
            assert_eq!(detail_post(ctx, PostId(1)).map(|p| p.id), Ok(PostId(1)));
            assert_eq!(
                detail_post(ctx, PostId(2)),
                Err(NavigationError::InvalidSelection(PostId(2)))
            );
        });
    }
}
