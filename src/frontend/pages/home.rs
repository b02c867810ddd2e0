use leptos::prelude::*;

use crate::frontend::components::{About, Blog, Contact, Hero, Projects, Skills};

/// Composed landing view; section order is fixed.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <About/>
        <Skills/>
        <Projects/>
        <Blog/>
        <Contact/>
    }
}
