//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. Route guards and
//! user-aware pages read it; only the transitions below mutate it, so the
//! session is always replaced wholesale (at most one user at a time).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::User;

/// Authentication state tracking the current user and request status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the first `/auth/me` check settles.
    pub loading: bool,
    /// True while a magic-link token exchange is in flight.
    pub verifying: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            verifying: false,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply the result of the startup session check. Any failure, including
    /// "not logged in", yields the logged-out state.
    pub fn session_checked(&mut self, result: Result<User, ApiError>) {
        self.user = result.ok();
        self.loading = false;
    }

    pub fn verify_started(&mut self) {
        self.verifying = true;
    }

    /// Apply the result of a token exchange, handing the error back so the
    /// verification page can display it.
    ///
    /// # Errors
    ///
    /// Returns the exchange error unchanged after clearing the user.
    pub fn verify_finished(&mut self, result: Result<User, ApiError>) -> Result<(), ApiError> {
        self.verifying = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                self.user = None;
                Err(e)
            }
        }
    }

    /// Clear the session. Called whether or not the logout request succeeded.
    pub fn logged_out(&mut self) {
        self.user = None;
    }
}

/// Exchange a magic-link token and record the outcome in the shared session.
///
/// # Errors
///
/// Returns the API error when the backend rejects the token.
#[cfg(feature = "hydrate")]
pub async fn login_with_token(auth: leptos::prelude::RwSignal<AuthState>, token: String) -> Result<(), ApiError> {
    use leptos::prelude::Update;

    auth.update(AuthState::verify_started);
    let result = crate::net::api::client().login_with_token(&token).await;
    if let Err(e) = &result {
        leptos::logging::warn!("login failed: {e}");
    }
    auth.try_update(|state| state.verify_finished(result))
        .unwrap_or(Err(ApiError::Unavailable))
}

/// Log out on the backend and clear the shared session regardless of outcome.
#[cfg(feature = "hydrate")]
pub async fn logout(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::Update;

    if let Err(e) = crate::net::api::client().logout().await {
        leptos::logging::warn!("logout failed: {e}");
    }
    auth.update(AuthState::logged_out);
}
