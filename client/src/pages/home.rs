//! Landing page with the anonymous "shorten" input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is shortened here. A valid URL is parked as the pending URL and
//! the visitor continues to the dashboard (or sign-in first), where the
//! create form picks it up.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;
use crate::state::home::{accept_shorten_input, destination, store_pending_url, take_pending_url};
use crate::util::storage::{LocalStorage, now_ms};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());

    // Runs after hydration so the SSR markup matches the first client render.
    Effect::new(move || {
        if let Some(url) = take_pending_url(&LocalStorage, now_ms()) {
            input.set(url);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(url) = accept_shorten_input(&input.get_untracked()) else {
            input.set(String::new());
            return;
        };
        store_pending_url(&LocalStorage, &url, now_ms());
        let target = destination(auth.get_untracked().is_authenticated());
        navigate(target, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"NanoCut"</span>
                <span class="home-page__spacer"></span>
                <ThemeToggle/>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| view! { <a class="btn" href="/auth">"Sign In"</a> }
                >
                    <a class="btn" href="/dashboard">"Dashboard"</a>
                </Show>
            </header>
            <main class="home-page__hero">
                <h1>"Shorten your links"</h1>
                <p class="home-page__subtitle">
                    "Paste a long URL, sign in with a magic link and get a short one back."
                </p>
                <form class="shorten-form" on:submit=on_submit>
                    <input
                        class="shorten-form__input"
                        type="url"
                        placeholder="https://example.com/a/very/long/link"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Shorten"
                    </button>
                </form>
            </main>
        </div>
    }
}
