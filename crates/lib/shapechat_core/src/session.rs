//! In-memory chat sessions.
//!
//! Sessions live for the lifetime of the process. There is no eviction; the
//! store only grows.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::shape::{Shape, ShapedResponse};

/// Session store errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a session's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub role: Role,
    /// Plain string for user turns, shape-dependent value for assistant turns.
    pub content: serde_json::Value,
    /// Only set on assistant turns.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn user(message: &str) -> Self {
        Self {
            role: Role::User,
            content: serde_json::Value::String(message.to_owned()),
            shape: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(response: &ShapedResponse) -> Self {
        Self {
            role: Role::Assistant,
            content: response.content.clone(),
            shape: Some(response.shape),
            timestamp: Utc::now(),
        }
    }
}

/// A conversation record keyed by an opaque id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub turns: Vec<Turn>,
}

impl Session {
    fn new(id: String) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            turns: Vec::new(),
        }
    }
}

/// Storage for chat sessions, shared across request handlers.
pub trait SessionStore: Send + Sync {
    /// Return `session_id` if known, creating the session if not.
    /// A missing or empty id gets a freshly generated one.
    fn ensure(&self, session_id: Option<&str>) -> String;

    /// Append a turn to an existing session.
    fn append(&self, session_id: &str, turn: Turn) -> Result<(), SessionError>;

    /// Clone of the session as it is now.
    fn snapshot(&self, session_id: &str) -> Option<Session>;
}

/// [`SessionStore`] backed by a concurrent map.
///
/// Appends to one session are serialized by the map's shard lock, so
/// concurrent requests never interleave inside a turn sequence.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions held.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn ensure(&self, session_id: Option<&str>) -> String {
        let id = match session_id.filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => Uuid::new_v4().to_string(),
        };
        self.sessions.entry(id.clone()).or_insert_with(|| {
            debug!(session_id = %id, "creating session");
            Session::new(id.clone())
        });
        id
    }

    fn append(&self, session_id: &str, turn: Turn) -> Result<(), SessionError> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_owned()))?;
        session.turns.push(turn);
        Ok(())
    }

    fn snapshot(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).map(|s| s.value().clone())
    }
}
