//! Landing-page shorten input and the pending URL it leaves behind.
//!
//! SYSTEM CONTEXT
//! ==============
//! An anonymous visitor can paste a URL before signing in. The URL is parked
//! in local storage with a short TTL, survives the magic-link round trip and
//! is consumed by whichever page reads it first (home or dashboard).

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::time::Duration;

use crate::util::guard::{DASHBOARD_PATH, LOGIN_PATH};
use crate::util::storage::{KeyValueStore, get_with_expiry, set_with_expiry};

pub const PENDING_URL_KEY: &str = "urlToShorten";
pub const PENDING_URL_TTL: Duration = Duration::from_secs(10 * 60);

const REQUIRED_SCHEME: &str = "https://";
/// Shortest accepted input in UTF-16 code units, scheme included.
const MIN_URL_LEN: usize = 14;

/// The trimmed input when it looks like a URL worth shortening.
pub fn accept_shorten_input(input: &str) -> Option<String> {
    let url = input.trim();
    (url.starts_with(REQUIRED_SCHEME) && url.encode_utf16().count() >= MIN_URL_LEN).then(|| url.to_owned())
}

pub fn store_pending_url<S: KeyValueStore + ?Sized>(store: &S, url: &str, now_ms: i64) {
    set_with_expiry(store, PENDING_URL_KEY, &url, PENDING_URL_TTL, now_ms);
}

/// Read and remove the pending URL. Expired or corrupt entries yield `None`.
pub fn take_pending_url<S: KeyValueStore + ?Sized>(store: &S, now_ms: i64) -> Option<String> {
    get_with_expiry::<_, String>(store, PENDING_URL_KEY, now_ms).filter(|url| !url.trim().is_empty())
}

/// Where a submitted landing-page URL sends the visitor.
pub fn destination(authenticated: bool) -> &'static str {
    if authenticated { DASHBOARD_PATH } else { LOGIN_PATH }
}
