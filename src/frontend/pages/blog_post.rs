use leptos::prelude::*;
use leptos_meta::Title;

use crate::content;

/// Post detail view, keyed by slug. Unknown slugs render the not-found
/// block rather than failing.
#[component]
pub fn BlogPostPage(slug: String) -> impl IntoView {
    match content::post(&slug) {
        Some(post) => view! {
            <Title text=post.title/>
            <article class="blog-post-page">
                <a href="/#blog" class="back-link">"← Back to Blog"</a>

                <header class="post-header">
                    <h1>{post.title}</h1>
                    <div class="post-meta">
                        <time datetime=post.date.to_string()>
                            {post.date.format("%B %e, %Y").to_string()}
                        </time>
                        <span class="read-time">"5 min read"</span>
                    </div>
                    <div class="post-tags">
                        {post
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                            .collect_view()}
                    </div>
                </header>

                <div class="post-content" inner_html=post.body></div>
            </article>
        }
        .into_any(),
        None => view! {
            <div class="content-not-found">
                <h1>"Post Not Found"</h1>
                <p>"The blog post you're looking for doesn't exist."</p>
                <a href="/" class="btn">"Back to Home"</a>
            </div>
        }
        .into_any(),
    }
}
