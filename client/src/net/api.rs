//! REST client for the NanoCut backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with cookie
//! credentials. Server-side (SSR) and tests: the HTTP transport reports
//! `ApiError::Unavailable`, so rendering never blocks on the network.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `Result<_, ApiError>`. Non-2xx responses become
//! `ApiError::Status` carrying the server's `message`, which callers surface
//! verbatim in banners.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{
    Ack, AuthEnvelope, CreateShortUrlRequest, Envelope, HealthResponse, ResolveResponse, ShortUrl, ToggleResult,
    UrlStats, User,
};

/// Budget for the `/health` check.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
const INVALID_JSON_MESSAGE: &str = "Invalid JSON response";
const MALFORMED_MESSAGE: &str = "Malformed response from server";
const LOGOUT_FAILED_MESSAGE: &str = "Logout failed";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    /// No transport is available in this environment (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            timeout: None,
        }
    }

    fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Raw status and body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves an `ApiRequest` over the wire.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Extract the error message from a failed response body.
fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback)
            .to_owned(),
        Err(_) => INVALID_JSON_MESSAGE.to_owned(),
    }
}

/// Decode a JSON body, mapping non-2xx statuses to `ApiError::Status`.
fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body, GENERIC_ERROR_MESSAGE),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn malformed() -> ApiError {
    ApiError::Status {
        status: 500,
        message: MALFORMED_MESSAGE.to_owned(),
    }
}

fn login_endpoint(token: &str) -> String {
    format!("/auth/login/{token}")
}

fn url_endpoint(id_or_code: &str) -> String {
    format!("/url/{id_or_code}")
}

fn toggle_endpoint(id: &str) -> String {
    format!("/url/{id}/toggle")
}

/// Typed wrapper over the backend endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        decode(&response)
    }

    /// Ask the backend to email a magic link via `POST /auth/register`.
    ///
    /// Returns the server's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the email.
    pub async fn register(&self, email: &str) -> Result<String, ApiError> {
        let request = ApiRequest::new(Method::Post, "/auth/register").with_body(serde_json::json!({ "email": email }));
        let body: AuthEnvelope = self.call(request).await?;
        Ok(body.message)
    }

    /// Exchange a one-time token for a session via `GET /auth/login/:token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the response has no user.
    pub async fn login_with_token(&self, token: &str) -> Result<User, ApiError> {
        let body: AuthEnvelope = self
            .call(ApiRequest::new(Method::Get, login_endpoint(token)))
            .await?;
        body.into_user().ok_or_else(malformed)
    }

    /// Fetch the user behind the current session cookie from `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an error when unauthenticated or when the envelope has no user.
    pub async fn me(&self) -> Result<User, ApiError> {
        let body: AuthEnvelope = self.call(ApiRequest::new(Method::Get, "/auth/me")).await?;
        body.into_user().ok_or_else(malformed)
    }

    /// Invalidate the session via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .transport
            .send(ApiRequest::new(Method::Post, "/auth/logout"))
            .await?;
        if response.ok() {
            return Ok(());
        }
        let message = serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| LOGOUT_FAILED_MESSAGE.to_owned());
        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }

    /// Create a short URL via `POST /url/shorten`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn create_short_url(&self, request: &CreateShortUrlRequest) -> Result<Envelope<ShortUrl>, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.call(ApiRequest::new(Method::Post, "/url/shorten").with_body(body))
            .await
    }

    /// List the current user's URLs via `GET /url/my-urls`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn my_urls(&self) -> Result<Envelope<Vec<ShortUrl>>, ApiError> {
        self.call(ApiRequest::new(Method::Get, "/url/my-urls")).await
    }

    /// Fetch aggregate counters via `GET /url/stats`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn stats(&self) -> Result<Envelope<UrlStats>, ApiError> {
        self.call(ApiRequest::new(Method::Get, "/url/stats")).await
    }

    /// Delete one of the user's URLs via `DELETE /url/:id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn delete_url(&self, id: &str) -> Result<Ack, ApiError> {
        self.call(ApiRequest::new(Method::Delete, url_endpoint(id))).await
    }

    /// Flip a URL between active and inactive via `PATCH /url/:id/toggle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn toggle_url(&self, id: &str) -> Result<Envelope<ToggleResult>, ApiError> {
        self.call(ApiRequest::new(Method::Patch, toggle_endpoint(id))).await
    }

    /// Resolve a short code via `GET /url/:shortCode`.
    ///
    /// The body is read whatever the status, since the backend explains
    /// unknown or expired codes in a `{ success: false, message }` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn resolve(&self, short_code: &str) -> Result<ResolveResponse, ApiError> {
        let response = self
            .transport
            .send(ApiRequest::new(Method::Get, url_endpoint(short_code)))
            .await?;
        match serde_json::from_str(&response.body) {
            Ok(body) => Ok(body),
            Err(_) if !response.ok() => Err(ApiError::Status {
                status: response.status,
                message: INVALID_JSON_MESSAGE.to_owned(),
            }),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }

    /// Call `GET /health`. Any failure, including the timeout, reads as offline.
    pub async fn health(&self) -> bool {
        let request = ApiRequest::new(Method::Get, "/health").with_timeout(HEALTH_TIMEOUT);
        let Ok(response) = self.transport.send(request).await else {
            return false;
        };
        response.ok()
            && serde_json::from_str::<HealthResponse>(&response.body).is_ok_and(|health| health.status == "success")
    }
}

/// Browser HTTP transport rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let url = self.url(&request.path);
        async move {
            #[cfg(feature = "hydrate")]
            {
                send_browser(url, request).await
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (url, request);
                Err(ApiError::Unavailable)
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_browser(url: String, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;

    let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
    let builder = match request.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    }
    .credentials(web_sys::RequestCredentials::Include);

    let exchange = async move {
        let response = match request.body {
            Some(body) => builder.json(&body).map_err(network)?.send().await,
            None => builder.send().await,
        }
        .map_err(network)?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    };

    match request.timeout {
        Some(limit) => {
            let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
            let timer = gloo_timers::future::TimeoutFuture::new(millis);
            match select(Box::pin(exchange), timer).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => Err(ApiError::Timeout),
            }
        }
        None => exchange.await,
    }
}

/// Client bound to the configured API base URL.
pub fn client() -> ApiClient<HttpTransport> {
    ApiClient::new(HttpTransport::new(crate::config::api_base_url()))
}
