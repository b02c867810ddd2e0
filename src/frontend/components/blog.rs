use leptos::prelude::*;

use crate::content;

/// Blog listing, one card per post, newest first.
#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="blog-section section" aria-label="Blog">
            <h2>"Blog"</h2>
            <p class="section-description">
                "Thoughts, tutorials, and insights from my journey as a developer."
            </p>

            <div class="blog-grid">
                {content::posts()
                    .iter()
                    .map(|post| {
                        view! {
                            <article class="blog-post">
                                <div class="post-meta">
                                    <span class="post-date">
                                        {post.date.format("%B %e, %Y").to_string()}
                                    </span>
                                    <span class="read-time">"5 min read"</span>
                                </div>
                                <h3 class="post-title">{post.title}</h3>
                                <p class="post-excerpt">{post.excerpt}</p>
                                <div class="post-tags">
                                    {post
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                                        .collect_view()}
                                </div>
                                <a href=format!("/blog/{}", post.slug) class="read-more">
                                    "Read more →"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
