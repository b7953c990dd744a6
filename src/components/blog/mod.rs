//! Blog components.
//!
//! - [`BlogTeaser`] - latest posts on the home page
//! - [`BlogIndex`] - every post, on the blog view
//! - [`PostDetail`] - a single post's markdown body
//!
//! Cards send [`NavMessage::SelectPost`]; they never change view state
//! themselves.

mod post;

use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::{self, BlogPost};
use weldon_core::NavMessage;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::HOME_TEASER_POSTS;

pub use post::PostDetail;

stylance::import_crate_style!(css, "src/components/blog/blog.module.css");

#[component]
pub fn BlogTeaser() -> impl IntoView {
    view! { <PostGrid posts=content::latest_posts(HOME_TEASER_POSTS) /> }
}

#[component]
pub fn BlogIndex() -> impl IntoView {
    view! { <PostGrid posts=content::POSTS page=true /> }
}

/// Post cards under the "Latest from the Blog" heading.
///
/// `page` pads the top for the fixed nav when the grid is the first block.
#[component]
fn PostGrid(posts: &'static [BlogPost], #[prop(optional)] page: bool) -> impl IntoView {
    let section_class = if page {
        format!("{} {}", css::blog, css::blogPage)
    } else {
        css::blog.to_string()
    };

    view! {
        <section id="blog" class=section_class>
            <div class=css::container>
                <div class=css::intro>
                    <div class=css::pill>"Insights"</div>
                    <h2 class=css::heading>"Latest from the Blog."</h2>
                    <p class=css::lede>
                        "Expert advice and industry updates to help you navigate the UK property market."
                    </p>
                </div>

                <div class=css::grid>
                    {posts
                        .iter()
                        .map(|post| view! { <PostCard post=post /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: &'static BlogPost) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let open = ctx.send(NavMessage::SelectPost(post.id));

    view! {
        <article class=css::card on:click=move |_| open.run(())>
            <div class=css::cardImage>
                <img class=css::cover src=post.image alt=post.title />
            </div>
            <div class=css::cardBody>
                <div class=css::date>{post.date}</div>
                <h3 class=css::cardTitle>{post.title}</h3>
                <p class=css::excerpt>{post.excerpt}</p>
                <div class=css::readMore>
                    "Read Article"
                    <Icon icon=ic::ARROW_RIGHT width="12" height="12" />
                </div>
            </div>
        </article>
    }
}
