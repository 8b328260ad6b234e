//! Shared helpers for router-level tests.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use shapechat_api::AppState;
use shapechat_api::config::ApiConfig;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a fresh session store and a config file in a temp dir.
///
/// Keep the returned [`TempDir`] alive for the duration of the test.
pub fn test_app() -> (Router, AppState, TempDir) {
    test_app_with_delay(Duration::ZERO)
}

/// Like [`test_app`], with a chat reply delay.
#[allow(dead_code)]
pub fn test_app_with_delay(response_delay: Duration) -> (Router, AppState, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        config_file: dir.path().join("config.json"),
        response_delay,
    };
    let state = AppState::new(config);
    (shapechat_api::router(state.clone()), state, dir)
}

/// Send a request and decode the JSON reply.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let req = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_owned())))
        .expect("request");

    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}
