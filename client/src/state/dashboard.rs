//! Dashboard list, stats, create form and error banner.
//!
//! DESIGN
//! ======
//! The backend owns the data; this is a read-through copy patched locally
//! after each successful mutation. A mutation answered with `success: false`
//! leaves the list untouched. Every `apply_*` method returns whether the
//! caller should refetch `/url/stats`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::net::types::{Ack, CreateShortUrlRequest, Envelope, ExpiresIn, ShortUrl, ToggleResult, UrlStats};

/// How long an error banner stays visible.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(2);

pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL to shorten";
const LOAD_FAILED_MESSAGE: &str = "Failed to load your URLs";
const CREATE_FAILED_MESSAGE: &str = "Failed to create short URL";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete URL";
const TOGGLE_FAILED_MESSAGE: &str = "Failed to update URL";

/// A transient error message. `seq` lets a delayed clear skip newer banners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub seq: u64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub urls: Vec<ShortUrl>,
    pub stats: UrlStats,
    pub loading: bool,
    pub create_pending: bool,
    pub original_url: String,
    pub custom_name: String,
    pub expires_in: ExpiresIn,
    pub banner: Option<Banner>,
    banner_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            stats: UrlStats::default(),
            loading: true,
            create_pending: false,
            original_url: String::new(),
            custom_name: String::new(),
            expires_in: ExpiresIn::default(),
            banner: None,
            banner_seq: 0,
        }
    }
}

fn failure_text(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

impl DashboardState {
    /// Show `text` as the banner and return its sequence number.
    pub fn show_error(&mut self, text: impl Into<String>) -> u64 {
        self.banner_seq += 1;
        self.banner = Some(Banner {
            seq: self.banner_seq,
            text: text.into(),
        });
        self.banner_seq
    }

    /// Clear the banner if it is still the one numbered `seq`.
    pub fn clear_banner(&mut self, seq: u64) {
        if self.banner.as_ref().is_some_and(|b| b.seq == seq) {
            self.banner = None;
        }
    }

    /// Pre-fill the create form with a URL carried over from the landing page.
    pub fn prefill(&mut self, pending: Option<String>) {
        if let Some(url) = pending.filter(|u| !u.trim().is_empty()) {
            self.original_url = url;
        }
    }

    pub fn apply_urls(&mut self, result: Result<Envelope<Vec<ShortUrl>>, ApiError>) {
        self.loading = false;
        match result {
            Ok(envelope) if envelope.success => self.urls = envelope.data.unwrap_or_default(),
            Ok(envelope) => {
                self.show_error(failure_text(envelope.message, LOAD_FAILED_MESSAGE));
            }
            Err(e) => {
                self.show_error(e.to_string());
            }
        }
    }

    /// Stats failures are silent; the previous counters stay on screen.
    pub fn apply_stats(&mut self, result: Result<Envelope<UrlStats>, ApiError>) {
        match result {
            Ok(envelope) => {
                if let Some(stats) = envelope.into_data() {
                    self.stats = stats;
                }
            }
            Err(e) => leptos::logging::warn!("failed to fetch stats: {e}"),
        }
    }

    /// Validate the form. An empty URL never reaches the network.
    ///
    /// # Errors
    ///
    /// Returns the banner text when the original URL is blank.
    pub fn create_request(&self) -> Result<CreateShortUrlRequest, &'static str> {
        if self.original_url.trim().is_empty() {
            return Err(EMPTY_URL_MESSAGE);
        }
        Ok(CreateShortUrlRequest::new(
            &self.original_url,
            &self.custom_name,
            self.expires_in,
        ))
    }

    /// Prepend the created URL and reset the URL and alias fields.
    pub fn apply_created(&mut self, result: Result<Envelope<ShortUrl>, ApiError>) -> bool {
        self.create_pending = false;
        match result {
            Ok(Envelope {
                success: true,
                data: Some(url),
                ..
            }) => {
                self.urls.insert(0, url);
                self.original_url.clear();
                self.custom_name.clear();
                true
            }
            Ok(envelope) => {
                self.show_error(failure_text(envelope.message, CREATE_FAILED_MESSAGE));
                false
            }
            Err(e) => {
                self.show_error(e.to_string());
                false
            }
        }
    }

    pub fn apply_deleted(&mut self, id: &str, result: Result<Ack, ApiError>) -> bool {
        match result {
            Ok(ack) if ack.success => {
                self.urls.retain(|url| url.id != id);
                true
            }
            Ok(ack) => {
                self.show_error(failure_text(ack.message, DELETE_FAILED_MESSAGE));
                false
            }
            Err(e) => {
                self.show_error(e.to_string());
                false
            }
        }
    }

    /// Patch only the toggled URL, trusting the server's `isActive` when sent.
    pub fn apply_toggled(&mut self, id: &str, result: Result<Envelope<ToggleResult>, ApiError>) -> bool {
        match result {
            Ok(envelope) if envelope.success => {
                let Some(url) = self.urls.iter_mut().find(|url| url.id == id) else {
                    return true;
                };
                match envelope.data {
                    Some(update) => {
                        url.is_active = update.is_active;
                        if let Some(expires_at) = update.expires_at {
                            url.expires_at = expires_at;
                        }
                    }
                    None => url.is_active = !url.is_active,
                }
                true
            }
            Ok(envelope) => {
                self.show_error(failure_text(envelope.message, TOGGLE_FAILED_MESSAGE));
                false
            }
            Err(e) => {
                self.show_error(e.to_string());
                false
            }
        }
    }
}

/// Full public link for a short code, e.g. `https://nanocut.app/u/abc123`.
pub fn short_link(origin: &str, short_code: &str) -> String {
    format!("{}/u/{short_code}", origin.trim_end_matches('/'))
}

/// Row heading: the custom alias when set, else the full short link.
pub fn display_title(url: &ShortUrl, origin: &str) -> String {
    url.custom_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map_or_else(|| short_link(origin, &url.short_code), str::to_owned)
}
