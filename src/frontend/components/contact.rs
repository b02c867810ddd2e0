use std::time::Duration;

use leptos::prelude::*;

use crate::content;

/// Phases of the simulated submission flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    /// Submission finished; the confirmation message is on screen.
    Confirmed,
}

impl SubmissionPhase {
    /// Accepts a submit request. Only an idle form with every field
    /// filled may start one; a form already submitting rejects it.
    pub fn begin(self, fields_filled: bool) -> Option<SubmissionPhase> {
        (self == SubmissionPhase::Idle && fields_filled).then_some(SubmissionPhase::Submitting)
    }

    /// The simulated send finished.
    pub fn complete(self) -> SubmissionPhase {
        match self {
            SubmissionPhase::Submitting => SubmissionPhase::Confirmed,
            other => other,
        }
    }

    /// The confirmation message timed out.
    pub fn dismiss(self) -> SubmissionPhase {
        match self {
            SubmissionPhase::Confirmed => SubmissionPhase::Idle,
            other => other,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionPhase::Submitting
    }
}

/// Simulated network latency before a submission "completes".
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the confirmation message stays on screen.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(5000);

pub const CONFIRMATION_MESSAGE: &str = "Thanks for your message! I'll get back to you soon.";

/// Contact form plus the connect aside. Submission is simulated with two
/// timers; both are cancelled if the view unmounts first.
#[component]
pub fn Contact() -> impl IntoView {
    let profile = content::profile();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (phase, set_phase) = signal(SubmissionPhase::Idle);
    let pending_timer = StoredValue::new_local(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let fields_filled = !name.get_untracked().trim().is_empty()
            && !email.get_untracked().trim().is_empty()
            && !message.get_untracked().trim().is_empty();
        let Some(next) = phase.get_untracked().begin(fields_filled) else {
            return;
        };
        set_phase.set(next);

        let handle = set_timeout_with_handle(
            move || {
                set_phase.set(phase.get_untracked().complete());
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());

                let handle = set_timeout_with_handle(
                    move || set_phase.set(phase.get_untracked().dismiss()),
                    CONFIRMATION_DELAY,
                )
                .ok();
                pending_timer.set_value(handle);
            },
            SUBMIT_DELAY,
        )
        .ok();
        pending_timer.set_value(handle);
    };

    view! {
        <section id="contact" class="contact card section" aria-label="Contact">
            <div>
                <h3>"Contact Me"</h3>
                <p class="muted">"Want to work together? Send a message or reach out on social media."</p>
                <form on:submit=submit>
                    <input
                        class="input"
                        placeholder="Your name"
                        name="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required
                    />
                    <input
                        class="input"
                        placeholder="Your email"
                        type="email"
                        name="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                    <textarea
                        placeholder="Your message"
                        name="message"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        required
                    ></textarea>
                    <button class="btn" type="submit" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        (phase.get() == SubmissionPhase::Confirmed)
                            .then(|| view! { <div class="submit-status">{CONFIRMATION_MESSAGE}</div> })
                    }}
                </form>
            </div>

            <aside class="card">
                <h4>"Connect"</h4>
                <p class="muted">
                    <a href=profile.linkedin_url target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                    " | "
                    <a href=profile.github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    " | "
                    <a href=format!("mailto:{}", profile.email)>"Email"</a>
                </p>
                <div class="connect-block">
                    <div class="connect-label">"Location"</div>
                    <div class="muted">{profile.location}</div>
                </div>
                <div class="connect-block">
                    <a href=profile.resume_url class="btn btn-outline" download>"Download Resume"</a>
                </div>
            </aside>
        </section>
    }
}
