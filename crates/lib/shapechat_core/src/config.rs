//! MCP server configuration document, stored as a single JSON file.
//!
//! The document is a JSON object whose only enforced constraint is the
//! presence of the [`SERVERS_KEY`] entry. It is read and replaced wholesale.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Required top-level key.
pub const SERVERS_KEY: &str = "mcpServers";

/// Configuration store errors.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One external tool server, launched as a subprocess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerEntry {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Typed view of a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, McpServerEntry>,
}

/// Document written on first access: one sample server with placeholder keys.
pub fn default_config() -> McpConfig {
    let datadog = McpServerEntry {
        command: "npx".into(),
        args: vec!["-y".into(), "@winor30/mcp-server-datadog".into()],
        env: BTreeMap::from([
            ("DATADOG_API_KEY".to_string(), "XXXXXXX".to_string()),
            ("DATADOG_APP_KEY".to_string(), "XXXXXXXXX".to_string()),
            ("DATADOG_SITE".to_string(), "datadoghq.com".to_string()),
        ]),
    };
    McpConfig {
        mcp_servers: BTreeMap::from([("mcp-server-datadog".to_string(), datadog)]),
    }
}

/// Check the one structural rule a document must satisfy.
pub fn validate(doc: &Value) -> Result<(), ConfigStoreError> {
    if doc.get(SERVERS_KEY).is_none() {
        return Err(ConfigStoreError::Validation(format!(
            "'{SERVERS_KEY}' is required"
        )));
    }
    Ok(())
}

/// File-backed configuration store. Last write wins.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write [`default_config`] if the file does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub async fn ensure_default(&self) -> Result<bool, ConfigStoreError> {
        let _guard = self.write_lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        let doc = serde_json::to_value(default_config())?;
        self.write(&doc).await?;
        info!(path = %self.path.display(), "wrote default MCP config");
        Ok(true)
    }

    /// Read the whole document, creating the default first if missing.
    pub async fn load(&self) -> Result<Value, ConfigStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.ensure_default().await?;
                tokio::fs::read_to_string(&self.path).await?
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate and persist `doc` wholesale, returning it unchanged.
    pub async fn replace(&self, doc: Value) -> Result<Value, ConfigStoreError> {
        validate(&doc)?;
        let _guard = self.write_lock.lock().await;
        self.write(&doc).await?;
        debug!(path = %self.path.display(), "replaced MCP config");
        Ok(doc)
    }

    /// Write `doc` atomically: temp file next to the target, then rename.
    async fn write(&self, doc: &Value) -> Result<(), ConfigStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(doc)?;

        // Readers see either the old file or the new one, never a partial write.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
