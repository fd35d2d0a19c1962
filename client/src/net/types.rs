//! Wire DTOs for the NanoCut REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Envelopes keep their
//! `success`/`message` flags so callers can tell an HTTP 200 carrying
//! `success: false` apart from a real payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/auth/me` and `/auth/login/:token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Email address the magic link was sent to.
    pub email: String,
    /// ISO 8601 timestamp of the previous login, if known.
    #[serde(default)]
    pub last_login: Option<String>,
    /// ISO 8601 account creation timestamp, if known.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A shortened URL owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub id: String,
    pub short_code: String,
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    /// ISO 8601 expiry timestamp.
    pub expires_at: String,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub clicks: u64,
    pub created_at: String,
    pub is_active: bool,
}

/// Aggregate counters shown in the dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStats {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_urls: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_clicks: u64,
}

/// Lifetime options offered by the create form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpiresIn {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ExpiresIn {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Number of days, which is also the wire value.
    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "7 days",
            Self::Month => "30 days",
            Self::Quarter => "90 days",
            Self::Year => "1 year",
        }
    }

    /// Parse the `<select>` value back into an option.
    pub fn from_days(raw: &str) -> Option<Self> {
        let days: u32 = raw.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.days() == days)
    }
}

/// Body of `POST /url/shorten`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    pub expires_in: String,
}

impl CreateShortUrlRequest {
    /// Build a request from raw form fields. A blank custom name is omitted.
    pub fn new(original_url: &str, custom_name: &str, expires_in: ExpiresIn) -> Self {
        let custom_name = custom_name.trim();
        Self {
            original_url: original_url.trim().to_owned(),
            custom_name: (!custom_name.is_empty()).then(|| custom_name.to_owned()),
            expires_in: expires_in.days().to_string(),
        }
    }
}

/// `{ success, data?, message? }` envelope used by the `/url` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload when the server reported success and included one.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Payload of a successful `PATCH /url/:id/toggle`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResult {
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// `{ success, message }` body of `DELETE /url/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /url/:shortCode`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `{ status, message, user?, data? }` envelope used by the `/auth` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub data: Option<User>,
}

impl AuthEnvelope {
    /// The user carried by the envelope, preferring `user` over `data`.
    pub fn into_user(self) -> Option<User> {
        self.user.or(self.data)
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
