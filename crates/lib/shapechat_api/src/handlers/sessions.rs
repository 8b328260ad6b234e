//! Chat session history.

use axum::Json;
use axum::extract::{Path, State};
use shapechat_core::session::{Session, SessionError};

use crate::AppState;
use crate::error::AppResult;

/// `GET /api/sessions/{id}` — every turn recorded for a session, oldest first.
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Session>> {
    let session = state
        .sessions
        .snapshot(&id)
        .ok_or(SessionError::NotFound(id))?;
    Ok(Json(session))
}
