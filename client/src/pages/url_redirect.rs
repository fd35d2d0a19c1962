//! Short-link resolver at `/u/:short_code`.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::state::redirect::RedirectPhase;
use crate::util::browser;

#[component]
pub fn UrlRedirectPage() -> impl IntoView {
    let phase = RwSignal::new(RedirectPhase::Loading);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_params_map;

        let short_code = use_params_map().get_untracked().get("short_code").unwrap_or_default();
        leptos::task::spawn_local(async move {
            let outcome = crate::state::redirect::resolve_short_code(&crate::net::api::client(), &short_code).await;
            if let RedirectPhase::Resolved(url) = &outcome {
                browser::redirect_to(url);
            }
            phase.set(outcome);
        });
    }

    view! {
        <div class="redirect-page">
            {move || match phase.get() {
                RedirectPhase::Loading | RedirectPhase::Resolved(_) => {
                    view! { <Loader label="Redirecting..."/> }.into_any()
                }
                RedirectPhase::Failed(message) => {
                    view! {
                        <div class="redirect-card">
                            <h1>"Link unavailable"</h1>
                            <p class="notice notice--error" role="alert">{message}</p>
                            <div class="redirect-card__actions">
                                <button class="btn btn--primary" on:click=move |_| browser::reload()>
                                    "Try Again"
                                </button>
                                <a class="btn" href="/">"Go Home"</a>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
