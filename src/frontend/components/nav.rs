use leptos::prelude::*;

use crate::content;
use crate::frontend::theme::{use_theme, Theme};

/// Site navigation with section links and the theme toggle. The toggle is
/// the only control that flips theme state.
#[component]
pub fn Navbar() -> impl IntoView {
    let profile = content::profile();
    let theme = use_theme();

    let toggle_label = move || match theme.current() {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    };
    let toggle_icon = move || match theme.current() {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    };

    view! {
        <nav class="container nav" aria-label="Main Navigation">
            <div class="brand">
                <div class="dot"></div>
                <div>
                    "Azhar" <div class="brand-sub">"Portfolio"</div>
                </div>
            </div>
            <div class="nav-links">
                <a href="/#about">"About"</a>
                <a href="/#skills">"Skills"</a>
                <a href="/#projects">"Projects"</a>
                <a href="/#blog">"Blog"</a>
                <a href="/#contact">"Contact"</a>
                <button
                    class="theme-toggle"
                    aria-label=toggle_label
                    on:click=move |_| theme.toggle()
                >
                    {toggle_icon}
                </button>
                <a href=profile.resume_url class="btn" download>"Download CV"</a>
            </div>
        </nav>
    }
}
