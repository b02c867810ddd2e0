use leptos::prelude::*;

use crate::content;

#[component]
pub fn About() -> impl IntoView {
    let profile = content::profile();

    view! {
        <section id="about" class="about" aria-label="About">
            <div class="left card">
                <h3>"About Me"</h3>
                {profile
                    .about
                    .iter()
                    .map(|paragraph| view! { <p class="muted">{*paragraph}</p> })
                    .collect_view()}
            </div>

            <div class="text card">
                <h4>"Education"</h4>
                <p class="muted">{profile.education}</p>

                <h4>"Contact"</h4>
                <p class="muted">
                    "Email: " <a href=format!("mailto:{}", profile.email)>{profile.email}</a>
                </p>
                <p class="muted">
                    "Phone: " <a href=format!("tel:{}", profile.phone)>{profile.phone}</a>
                </p>
            </div>
        </section>
    }
}
