//! Wrapper that renders its children only when the session allows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page sits inside a `RouteGuard`. While the startup session
//! check runs (or a redirect is about to happen) the guard shows a loader.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::util::guard::{Access, GuardOutcome, evaluate, install_guard_redirect};

#[component]
pub fn RouteGuard(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, access, use_navigate());

    view! {
        <Show
            when=move || evaluate(access, &auth.get()) == GuardOutcome::Render
            fallback=|| view! { <Loader/> }
        >
            {children()}
        </Show>
    }
}
