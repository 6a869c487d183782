//! Trendrater API Server
//!
//! Serves the latest rating table, health and metrics. Ratings are refreshed
//! on demand (`POST /api/ratings/refresh`) or on a cron schedule when
//! `REFRESH_INTERVAL_SECONDS` is set.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use trendrater::config::AppConfig;
use trendrater::core::http::start_server;
use trendrater::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    let port = config.port;
    info!("Starting Trendrater API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(
        vs_currency = %config.vs_currency,
        top_n = config.top_n,
        refresh_interval_seconds = config.refresh_interval_seconds,
        "Rating settings"
    );

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
