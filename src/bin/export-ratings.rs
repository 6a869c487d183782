//! One-shot rating run written to CSV
//!
//! `VS_CURRENCY` picks the ranking currency, `OUTPUT_FILE` the destination.

use dotenvy::dotenv;
use tracing::info;
use trendrater::config::AppConfig;
use trendrater::core::agent::RatingAgent;
use trendrater::export::export_to_path;
use trendrater::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    info!(
        environment = %config.environment,
        vs_currency = %config.vs_currency,
        top_n = config.top_n,
        "Starting rating export"
    );

    let agent = RatingAgent::from_config(&config)?;
    let table = agent.run(&config.vs_currency, config.top_n).await?;
    export_to_path(&table, &config.output_file)?;

    info!(
        rows = table.len(),
        path = %config.output_file,
        "Saved ratings to {}",
        config.output_file
    );
    Ok(())
}
