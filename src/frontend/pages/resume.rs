use leptos::prelude::*;
use leptos_meta::Title;

use crate::content;

#[component]
pub fn ResumePage() -> impl IntoView {
    let profile = content::profile();

    view! {
        <Title text="Resume — Azhar Ali Shah"/>
        <section id="resume" class="resume-section card" aria-label="Resume">
            <h2>"Resume"</h2>
            <p class="section-description">"Download my complete resume in PDF format."</p>

            <div class="resume-content">
                <div class="resume-preview">
                    <div class="preview-placeholder">
                        <div class="preview-text">"Resume Preview"</div>
                    </div>
                </div>

                <div class="resume-download">
                    <h3>"Download Full Resume"</h3>
                    <p>"Get a comprehensive overview of my experience, skills, and qualifications."</p>
                    <a href=profile.resume_url download class="btn">"Download PDF"</a>
                </div>
            </div>
        </section>
    }
}
