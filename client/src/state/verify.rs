//! Magic-link verification state machine.
//!
//! `Checking` is the only non-terminal phase; the single token exchange moves
//! it to `Success` or `Error`. Malformed tokens go straight to `Error`
//! without touching the network.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use std::future::Future;
use std::time::Duration;

use crate::net::api::ApiError;

/// Exact length of a magic-link token, in UTF-16 code units.
pub const TOKEN_LEN: usize = 64;
/// Pause on the success screen before moving to the dashboard.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid verification link format.";
pub const SUCCESS_MESSAGE: &str = "Successfully logged in! Redirecting to dashboard...";
pub const FALLBACK_ERROR_MESSAGE: &str = "Invalid or expired login link. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VerifyPhase {
    #[default]
    Checking,
    Success,
    Error(String),
}

impl VerifyPhase {
    fn from_error(error: &ApiError) -> Self {
        let message = error.to_string();
        if message.trim().is_empty() {
            Self::Error(FALLBACK_ERROR_MESSAGE.to_owned())
        } else {
            Self::Error(message)
        }
    }
}

/// The token, if it has the exact magic-link length (UTF-16 code units, as
/// the browser counts string length).
pub fn well_formed_token(token: Option<&str>) -> Option<&str> {
    token.filter(|t| t.encode_utf16().count() == TOKEN_LEN)
}

/// Run one verification attempt. `login` is only invoked for a well-formed
/// token.
pub async fn verify_token<F, Fut>(token: Option<&str>, login: F) -> VerifyPhase
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(token) = well_formed_token(token) else {
        return VerifyPhase::Error(INVALID_FORMAT_MESSAGE.to_owned());
    };
    match login(token.to_owned()).await {
        Ok(()) => VerifyPhase::Success,
        Err(e) => VerifyPhase::from_error(&e),
    }
}
