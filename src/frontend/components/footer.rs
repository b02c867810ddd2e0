use leptos::prelude::*;

use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = content::profile();

    view! {
        <footer class="footer">
            <AccessibilityStatement/>
            <div class="footer-line">
                {format!("© 2025 {} — Built with Rust • ", profile.name)}
                <a href=profile.linkedin_url target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                " • "
                <a href=profile.github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
            </div>
        </footer>
    }
}

#[component]
fn AccessibilityStatement() -> impl IntoView {
    let profile = content::profile();

    view! {
        <div class="accessibility-statement">
            <h3>"Accessibility Commitment"</h3>
            <p>
                "I am committed to ensuring digital accessibility for people with disabilities. "
                "I am continually improving the user experience for everyone and applying "
                "relevant accessibility standards."
            </p>
            <h4>"Conformance Status"</h4>
            <p>
                "The Web Content Accessibility Guidelines (WCAG) defines requirements for designers "
                "and developers to improve accessibility for people with disabilities. It defines "
                "three levels of conformance: Level A, Level AA, and Level AAA. This website aims "
                "to conform to Level AA of the WCAG 2.1."
            </p>
            <h4>"Feedback"</h4>
            <p>
                "If you experience any accessibility barriers while using this website, please contact me at "
                <a href=format!("mailto:{}", profile.email)>{profile.email}</a>
                "."
            </p>
        </div>
    }
}
