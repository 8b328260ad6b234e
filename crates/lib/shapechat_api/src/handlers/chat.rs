//! Chat request handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shapechat_core::ShapedResponse;
use shapechat_core::session::Turn;
use tracing::{debug, error};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — classify the message and reply with shaped sample content.
///
/// The session id is resolved once up front so that failure replies carry
/// the same id as successful ones.
pub async fn chat_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request = ChatRequest::from_body(&body);
    let session_id = state.sessions.ensure(request.session_id.as_deref());

    match reply(&state, &session_id, &request.message).await {
        Ok(response) => Json(ChatResponse::new(response, session_id)).into_response(),
        Err(e) => {
            error!(session_id = %session_id, error = %e, "chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse::server_error(e, session_id)),
            )
                .into_response()
        }
    }
}

async fn reply(state: &AppState, session_id: &str, message: &str) -> AppResult<ShapedResponse> {
    state.sessions.append(session_id, Turn::user(message))?;

    let response = shapechat_core::respond(message);
    debug!(session_id, shape = %response.shape, "generated reply");

    state
        .sessions
        .append(session_id, Turn::assistant(&response))?;

    if !state.config.response_delay.is_zero() {
        tokio::time::sleep(state.config.response_delay).await;
    }
    Ok(response)
}
