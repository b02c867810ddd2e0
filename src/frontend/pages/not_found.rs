use leptos::prelude::*;

/// 404 page for paths outside the routing table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-content">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Sorry, the page you're looking for doesn't exist or has been moved."</p>
                <a href="/" class="btn">"Back to Home"</a>
            </div>
        </div>
    }
}
