//! API server configuration.

use std::path::PathBuf;
use std::time::Duration;

use shapechat_core::config::DEFAULT_CONFIG_FILE;

/// Default artificial delay before a chat reply is returned.
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 500;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Path of the MCP server configuration JSON file.
    pub config_file: PathBuf,
    /// Simulated processing time added to every chat reply.
    pub response_delay: Duration,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default          |
    /// |-------------------------|------------------|
    /// | `BIND_ADDR`             | `127.0.0.1:5000` |
    /// | `SHAPECHAT_CONFIG_FILE` | `config.json`    |
    /// | `RESPONSE_DELAY_MS`     | `500`            |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            config_file: std::env::var("SHAPECHAT_CONFIG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_file),
            response_delay: std::env::var("RESPONSE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map_or(defaults.response_delay, Duration::from_millis),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            response_delay: Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS),
        }
    }
}
