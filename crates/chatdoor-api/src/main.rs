//! chatdoor API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chatdoor-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use chatdoor_common::{try_init_tracing_with_config, AppConfig, ConfigError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Log format follows the deployment environment when it is known
    let tracing_config = config
        .as_ref()
        .map(|c| TracingConfig::for_environment(c.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting chatdoor API server...");

    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    chatdoor_api::run(config).await?;

    Ok(())
}
