//! Centered spinner shown while a route waits on the session check or data.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="loader__spinner" aria-hidden="true"></span>
            <span class="loader__label">{label.unwrap_or_else(|| "Loading...".to_owned())}</span>
        </div>
    }
}
