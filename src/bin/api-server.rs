//! StockScope API Server
//!
//! HTTP API serving simulated quotes, price histories and technical analysis.
//! Every analysis is recomputed from scratch, so the service is stateless
//! apart from the simulated quote feed.

use dotenvy::dotenv;
use stockscope::config::AppConfig;
use stockscope::core::http::start_server;
use stockscope::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    let env = stockscope::config::get_environment();
    info!("Starting StockScope API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(timeframe = %config.default_timeframe, "Default analysis timeframe");

    let server_config = config.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&server_config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
