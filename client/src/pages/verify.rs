//! Magic-link landing route at `/auth/verify?token=...`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is exchanged exactly once, when the page mounts in the browser.
//! On success the shared session gains a user, so the guest-only guard may
//! move on to the dashboard before the success delay elapses.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::state::verify::{SUCCESS_MESSAGE, VerifyPhase};

#[component]
pub fn VerifyPage() -> impl IntoView {
    let phase = RwSignal::new(VerifyPhase::Checking);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::{use_navigate, use_query_map};

        use crate::state::auth::{AuthState, login_with_token};
        use crate::state::verify::{REDIRECT_DELAY, verify_token};
        use crate::util::guard::DASHBOARD_PATH;

        let auth = expect_context::<RwSignal<AuthState>>();
        let token = use_query_map().get_untracked().get("token");
        let navigate = use_navigate();
        leptos::task::spawn_local(async move {
            let outcome = verify_token(token.as_deref(), |token| login_with_token(auth, token)).await;
            let succeeded = outcome == VerifyPhase::Success;
            phase.set(outcome);
            if succeeded {
                gloo_timers::future::sleep(REDIRECT_DELAY).await;
                navigate(
                    DASHBOARD_PATH,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
        });
    }

    view! {
        <div class="verify-page">
            <div class="verify-card">
                {move || match phase.get() {
                    VerifyPhase::Checking => {
                        view! { <Loader label="Verifying your login link..."/> }.into_any()
                    }
                    VerifyPhase::Success => {
                        view! {
                            <h1>"You're in"</h1>
                            <p class="notice notice--success">{SUCCESS_MESSAGE}</p>
                            <a class="btn" href="/">"Back to Home"</a>
                        }
                            .into_any()
                    }
                    VerifyPhase::Error(message) => {
                        view! {
                            <h1>"Verification failed"</h1>
                            <p class="notice notice--error" role="alert">{message}</p>
                            <div class="verify-card__actions">
                                <a class="btn btn--primary" href="/auth">"Try Again"</a>
                                <a class="btn" href="/">"Back to Home"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
