use leptos::prelude::*;

use crate::content;

/// Skill matrix, grouped by category.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="card section" aria-label="Skills">
            <h3>"Skills"</h3>
            <p class="muted">"A selection of my main skills & expertise."</p>
            <div class="skills-container">
                {content::skill_categories()
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="skills-category">
                                <h4>{category.name}</h4>
                                <div class="skills-grid">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="skill">
                                                    <div class="icon" aria-hidden="true">{skill.icon}</div>
                                                    <div>
                                                        <div class="skill-title">{skill.title}</div>
                                                        <div class="skill-desc muted">{skill.description}</div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
