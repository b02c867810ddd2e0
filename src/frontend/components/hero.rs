use leptos::prelude::*;

use crate::content;

/// Intro section with the profile card and calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    let profile = content::profile();

    view! {
        <section class="hero" id="home" aria-label="Intro">
            <div class="left">
                <div class="card">
                    <div class="hero-head">
                        <div>
                            <div class="eyebrow">"Hello, I'm"</div>
                            <div class="name">{profile.name}</div>
                            <div class="role">{profile.role}</div>
                            <p class="muted">{profile.intro}</p>
                            <div class="cta">
                                <a class="btn" href="/#contact">"Hire Me"</a>
                                <a class="link-quiet" href="/#projects">"View Projects"</a>
                            </div>
                        </div>
                        <div class="hero-aside muted">
                            <div>"UET Mardan"</div>
                            <div>"BS Software Engineering"</div>
                        </div>
                    </div>
                </div>

                <div class="card bio">
                    <strong>"Quick Info"</strong>
                    <div class="info-grid">
                        <div>
                            <strong>"Name"</strong>
                            <div class="muted">{profile.name}</div>
                        </div>
                        <div>
                            <strong>"Role"</strong>
                            <div class="muted">"Software Engineer / Student"</div>
                        </div>
                        <div>
                            <strong>"Location"</strong>
                            <div class="muted">{profile.location}</div>
                        </div>
                        <div>
                            <strong>"Education"</strong>
                            <div class="muted">{profile.education}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="right">
                <div class="card portrait-card">
                    <img src=profile.portrait alt=profile.name loading="lazy"/>
                    <div class="portrait-caption">
                        <div class="portrait-name">{profile.name}</div>
                        <div class="muted">{profile.tagline}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
