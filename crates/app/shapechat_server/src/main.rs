//! Shapechat demo chat API server binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use shapechat_api::config::ApiConfig;
use shapechat_core::classifier::RULES;
use tracing::info;

/// CLI arguments for the API server.
///
/// Each flag overrides the matching environment variable read by
/// [`ApiConfig::from_env`].
#[derive(Parser, Debug)]
#[command(name = "shapechat_server", about = "Shapechat demo chat API server")]
struct Args {
    /// Address to listen on [env: BIND_ADDR, default: 127.0.0.1:5000].
    #[arg(long)]
    bind: Option<String>,

    /// MCP server configuration file, created with defaults if missing
    /// [env: SHAPECHAT_CONFIG_FILE, default: config.json].
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Simulated processing time added to each chat reply, in milliseconds
    /// [env: RESPONSE_DELAY_MS, default: 500].
    #[arg(long)]
    response_delay_ms: Option<u64>,
}

impl Args {
    fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(path) = self.config_file {
            config.config_file = path;
        }
        if let Some(ms) = self.response_delay_ms {
            config.response_delay = Duration::from_millis(ms);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "info,shapechat_api=debug,shapechat_core=debug",
                    )
                }),
        )
        .init();

    let args = Args::parse();

    let config = args.apply(ApiConfig::from_env());

    info!(
        bind_addr = %config.bind_addr,
        config_file = %config.config_file.display(),
        response_delay_ms = config.response_delay.as_millis() as u64,
        "starting shapechat_server"
    );

    let state = shapechat_api::AppState::new(config.clone());
    if state.config_store.ensure_default().await? {
        info!("created default MCP config");
    }

    for endpoint in shapechat_api::routes::ENDPOINTS {
        info!("endpoint: {endpoint}");
    }
    for rule in RULES {
        info!(shape = %rule.shape, keywords = ?rule.keywords, "chat keyword rule");
    }

    let app = shapechat_api::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
