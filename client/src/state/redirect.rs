//! Short-code resolution for the `/u/:short_code` route.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::net::api::{ApiClient, Transport};

pub const MISSING_CODE_MESSAGE: &str = "No short code provided";
pub const UNRESOLVED_MESSAGE: &str = "Failed to resolve URL";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RedirectPhase {
    #[default]
    Loading,
    /// Destination to hand to the browser.
    Resolved(String),
    Failed(String),
}

/// Look up the destination for `short_code`. Nothing is cached; every visit
/// asks the backend.
pub async fn resolve_short_code<T: Transport>(api: &ApiClient<T>, short_code: &str) -> RedirectPhase {
    let short_code = short_code.trim();
    if short_code.is_empty() {
        return RedirectPhase::Failed(MISSING_CODE_MESSAGE.to_owned());
    }

    match api.resolve(short_code).await {
        Ok(body) => match body.url {
            Some(url) if body.success && !url.is_empty() => RedirectPhase::Resolved(url),
            _ => RedirectPhase::Failed(
                body.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNRESOLVED_MESSAGE.to_owned()),
            ),
        },
        Err(e) => {
            leptos::logging::warn!("error resolving short code {short_code}: {e}");
            let message = e.to_string();
            RedirectPhase::Failed(if message.is_empty() { UNEXPECTED_MESSAGE.to_owned() } else { message })
        }
    }
}
