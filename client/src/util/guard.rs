//! Route guards driven by the shared auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same rules: a loader while the startup
//! session check is pending, guest-only routes bounce signed-in users to the
//! dashboard, private routes bounce anonymous users to `/auth`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/auth";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    GuestOnly,
    Private,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

/// Decide what a route with `access` should do for the current session.
pub fn evaluate(access: Access, state: &AuthState) -> GuardOutcome {
    match access {
        Access::Public => GuardOutcome::Render,
        _ if state.loading => GuardOutcome::Loading,
        Access::GuestOnly if state.is_authenticated() => GuardOutcome::Redirect(DASHBOARD_PATH),
        Access::Private if !state.is_authenticated() => GuardOutcome::Redirect(LOGIN_PATH),
        _ => GuardOutcome::Render,
    }
}

/// Navigate away whenever the guard for `access` asks for a redirect.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = evaluate(access, &auth.get()) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
