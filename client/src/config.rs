//! Build-time client configuration.
//!
//! The WASM bundle cannot read the host's environment at runtime, so these
//! values are baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base URL used when `NANOCUT_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api";

/// Base URL prefixed to every REST path.
pub fn api_base_url() -> &'static str {
    option_env!("NANOCUT_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Whether the app gates rendering on the network and `/health` checks.
pub fn status_check_enabled() -> bool {
    option_env!("NANOCUT_STATUS_CHECK")
        .and_then(parse_bool)
        .unwrap_or(false)
}

/// Parse a human-friendly boolean flag.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
