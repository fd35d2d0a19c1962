//! Light / dark switch bound to the shared theme context.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.update(ThemeState::toggle)
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
