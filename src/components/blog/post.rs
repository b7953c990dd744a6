use leptos::prelude::*;
use leptos_icons::Icon;
use weldon_core::content::BlogPost;
use weldon_core::NavMessage;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::markdown_to_html;

/// Full post view.
///
/// The body is markdown compiled into the binary; it is rendered once per
/// mount and sanitized before injection.
#[component]
pub fn PostDetail(post: &'static BlogPost) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let back = ctx.send(NavMessage::GoToBlogList);
    let (author, author_role) = ctx.site.with_value(|site| {
        (
            format!("{} Team", site.company.short_name),
            site.company.tagline.clone(),
        )
    });
    let body = markdown_to_html(post.body);

    view! {
        <section class=css::post>
            <div class=css::article>
                <button class=css::back on:click=move |_| back.run(())>
                    <Icon icon=ic::ARROW_LEFT width="12" height="12" />
                    "Back to Blog"
                </button>

                <div class=css::pill>{post.category}</div>
                <h1 class=css::postTitle>{post.title}</h1>

                <div class=css::byline>
                    <div class=css::author>
                        <div class=css::authorAvatar></div>
                        <div>
                            <p class=css::authorName>{author}</p>
                            <p class=css::authorRole>{author_role}</p>
                        </div>
                    </div>
                    <div class=css::divider></div>
                    <div class=css::date>{post.date}</div>
                </div>

                <div class=css::hero>
                    <img class=css::cover src=post.image alt=post.title />
                </div>

                <div class=css::prose inner_html=body></div>
            </div>
        </section>
    }
}
