//! Full-screen gate for the optional connectivity check.
//!
//! Renders the routed app unless the browser is offline or the backend
//! failed its `/health` check.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::state::status::{Screen, StatusState};

#[component]
pub fn StatusGate(on_retry: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    move || match status.get().screen() {
        Screen::App => children().into_any(),
        Screen::Pending => view! { <Loader label="Checking server status..."/> }.into_any(),
        Screen::Offline => view! { <OfflineScreen/> }.into_any(),
        Screen::ServerDown => view! {
            <ServerDownScreen on_retry=on_retry checking=Signal::derive(move || status.get().checking)/>
        }
        .into_any(),
    }
}

#[component]
fn OfflineScreen() -> impl IntoView {
    view! {
        <div class="status-screen">
            <h1>"You're Offline"</h1>
            <p>"Check your internet connection. NanoCut will reconnect automatically."</p>
        </div>
    }
}

#[component]
fn ServerDownScreen(on_retry: Callback<()>, checking: Signal<bool>) -> impl IntoView {
    view! {
        <div class="status-screen">
            <h1>"Server Unavailable"</h1>
            <p>"We can't reach the NanoCut servers right now. Please try again in a moment."</p>
            <button class="btn btn--primary" disabled=move || checking.get() on:click=move |_| on_retry.run(())>
                {move || if checking.get() { "Checking..." } else { "Retry" }}
            </button>
        </div>
    }
}
