use leptos::prelude::*;
use serde_json::json;

use crate::content;

/// schema.org Person descriptor, embedded as JSON-LD for crawlers.
#[component]
pub fn StructuredData() -> impl IntoView {
    let profile = content::profile();
    let payload = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "url": "",
        "image": profile.portrait,
        "sameAs": [profile.linkedin_url, profile.github_url],
        "jobTitle": "Software Engineer",
        "worksFor": {
            "@type": "Organization",
            "name": "UET Mardan"
        },
        "alumniOf": "UET Mardan",
        "description": "Software Engineer, UI/UX Designer, and Cybersecurity Expert. Showcasing projects, skills, and experience."
    })
    .to_string();

    view! { <script type="application/ld+json" inner_html=payload></script> }
}
