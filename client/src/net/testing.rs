//! Scripted in-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;

use super::api::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())));
        async move { reply }
    }
}

pub fn scripted(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
    ApiClient::new(transport)
}

pub fn sample_url(id: &str, active: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "shortCode": format!("code-{id}"),
        "originalUrl": format!("https://example.com/{id}"),
        "expiresAt": "2026-11-18T00:00:00Z",
        "clicks": 3,
        "createdAt": "2026-10-19T00:00:00Z",
        "isActive": active
    })
}

pub fn sample_user() -> serde_json::Value {
    serde_json::json!({ "id": "user-1", "email": "ada@example.com" })
}
