//! Request and response bodies.

use serde::Serialize;
use serde_json::Value;
use shapechat_core::{Shape, ShapedResponse};

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /api/chat`, read leniently.
///
/// Unparseable bodies and missing or non-string fields fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            message: field("message").unwrap_or_default(),
            session_id: field("sessionId"),
        }
    }
}

/// Reply to `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub shape: Shape,
    pub content: Value,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl ChatResponse {
    pub fn new(response: ShapedResponse, session_id: String) -> Self {
        Self {
            shape: response.shape,
            content: response.content,
            session_id,
        }
    }

    /// Chat-shaped reply for a request that failed after the session id was known.
    pub fn server_error(description: impl std::fmt::Display, session_id: String) -> Self {
        Self {
            shape: Shape::Error,
            content: Value::String(format!("Server error: {description}")),
            session_id,
        }
    }
}

/// Reply to `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub endpoints: Vec<String>,
}
