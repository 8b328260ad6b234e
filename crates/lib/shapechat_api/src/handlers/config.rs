//! MCP server configuration handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `GET /api/config` — the whole configuration document.
pub async fn get_config_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let doc = state.config_store.load().await?;
    Ok(Json(doc))
}

/// `PUT /api/config` — replace the configuration document wholesale.
pub async fn put_config_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let doc: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Invalid configuration: {e}")))?;
    let doc = state.config_store.replace(doc).await?;
    info!(path = %state.config_store.path().display(), "MCP config updated");
    Ok(Json(doc))
}
