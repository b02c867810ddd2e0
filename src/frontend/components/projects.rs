use leptos::prelude::*;

use crate::content::{self, ALL_TAG};

/// Project showcase with client-side tag filtering.
#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ALL_TAG.to_string());
    let tags = content::collect_tags(content::projects());
    let filtered = move || content::filter_by_tag(content::projects(), &filter.get());

    view! {
        <section id="projects" class="projects-section section" aria-label="Projects">
            <h2>"Projects"</h2>
            <p class="section-description">"Showcasing my recent work and passion projects."</p>

            <div class="filter-buttons">
                {tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.get() == tag
                                on:click=move |_| set_filter.set(tag.to_string())
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="projects-grid">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <div class="project-card">
                                    <div class="project-image">
                                        <img src=project.image alt=project.title loading="lazy"/>
                                    </div>
                                    <div class="project-content">
                                        <h3>{project.title}</h3>
                                        <p>{project.description}</p>
                                        <div class="project-tags">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| view! { <span class="tag">{*tag}</span> })
                                                .collect_view()}
                                        </div>
                                        <div class="project-links">
                                            <a
                                                href=format!("/projects/{}", project.id)
                                                class="btn btn-secondary"
                                            >
                                                "View Case Study"
                                            </a>
                                            <a href=project.demo_url class="btn btn-outline">"Live Demo"</a>
                                            <a href=project.github_url class="btn btn-outline">"GitHub"</a>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
