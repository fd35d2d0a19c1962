//! Magic-link request form at `/auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeKind};

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address";
pub const SENT_MESSAGE: &str = "Login link sent to your email! Please check your inbox.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send login link. Please try again.";

/// Trimmed email, or the message to show instead of calling the backend.
///
/// # Errors
///
/// Returns [`EMPTY_EMAIL_MESSAGE`] for a blank input.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMPTY_EMAIL_MESSAGE);
    }
    Ok(email.to_owned())
}

/// Text for a failed request: the server's words when it sent any.
pub fn send_failure_message(message: &str) -> String {
    if message.trim().is_empty() {
        SEND_FAILED_MESSAGE.to_owned()
    } else {
        message.to_owned()
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let success = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        success.set(String::new());
        error.set(String::new());
        let email_value = match validate_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::client().register(&email_value).await {
                Ok(_) => {
                    success.set(SENT_MESSAGE.to_owned());
                    email.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("login link request failed: {e}");
                    error.set(send_failure_message(&e.to_string()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to NanoCut"</h1>
                <p class="auth-card__subtitle">"We'll email you a one-time login link."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Login Link" }}
                    </button>
                </form>
                <Notice kind=NoticeKind::Success message=success/>
                <Notice kind=NoticeKind::Error message=error/>
                <a class="auth-card__back" href="/">"Back to Home"</a>
            </div>
        </div>
    }
}
