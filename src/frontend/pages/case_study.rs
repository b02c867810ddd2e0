use leptos::prelude::*;
use leptos_meta::Title;

use crate::content;

/// Case-study detail view. Unknown ids get the same explicit not-found
/// treatment as blog posts; no record is ever substituted.
#[component]
pub fn CaseStudyPage(id: u32) -> impl IntoView {
    match content::case_study(id) {
        Some(study) => view! {
            <Title text=format!("{} — Case Study", study.title)/>
            <article class="project-case-study">
                <a href="/#projects" class="back-link">"← Back to Projects"</a>

                <header class="project-header">
                    <h1>{study.title}</h1>
                    <p class="project-description">{study.description}</p>
                    <div class="project-actions">
                        <a href=study.live_url class="btn">"Live Demo"</a>
                        <a href=study.github_url class="btn btn-outline">"GitHub"</a>
                    </div>
                </header>

                <div class="project-gallery">
                    {study
                        .images
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <img
                                    src=*image
                                    alt=format!("{} screenshot {}", study.title, index + 1)
                                    class="project-image"
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="project-details">
                    <section class="detail-section">
                        <h2>"The Challenge"</h2>
                        <p>{study.challenge}</p>
                    </section>
                    <section class="detail-section">
                        <h2>"The Solution"</h2>
                        <p>{study.solution}</p>
                    </section>
                    <section class="detail-section">
                        <h2>"Results"</h2>
                        <p>{study.results}</p>
                    </section>
                    <section class="detail-section">
                        <h2>"Tech Stack"</h2>
                        <div class="tech-stack">
                            {study
                                .tech_stack
                                .iter()
                                .map(|tech| view! { <span class="tech-tag">{*tech}</span> })
                                .collect_view()}
                        </div>
                    </section>
                </div>
            </article>
        }
        .into_any(),
        None => view! {
            <div class="content-not-found">
                <h1>"Project Not Found"</h1>
                <p>"The case study you're looking for doesn't exist."</p>
                <a href="/" class="btn">"Back to Home"</a>
            </div>
        }
        .into_any(),
    }
}
