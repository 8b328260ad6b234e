//! # shapechat_api
//!
//! HTTP API library for Shapechat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use shapechat_core::config::ConfigStore;
use shapechat_core::session::{InMemorySessionStore, SessionStore};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, config as config_handlers, root, sessions};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat session storage.
    pub sessions: Arc<dyn SessionStore>,
    /// MCP server configuration file.
    pub config_store: Arc<ConfigStore>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// State with an empty in-memory session store and the config file from `config`.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            sessions: Arc::new(InMemorySessionStore::new()),
            config_store: Arc::new(ConfigStore::new(config.config_file.clone())),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_ROOT, get(root::status_handler))
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(
            routes::API_CONFIG,
            get(config_handlers::get_config_handler).put(config_handlers::put_config_handler),
        )
        .route(
            routes::GET_API_SESSIONS_ID,
            get(sessions::get_session_handler),
        )
        .layer(cors)
        .with_state(state)
}
