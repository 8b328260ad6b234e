//! Service status endpoint.

use axum::Json;

use crate::models::StatusResponse;
use crate::routes::ENDPOINTS;

/// `GET /` — reports that the API is up and lists its endpoints.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API running".into(),
        endpoints: ENDPOINTS.iter().map(|e| (*e).to_string()).collect(),
    })
}
