//! Error types shared across the rating pipeline

use crate::models::timeframe::Timeframe;
use thiserror::Error;

/// Invalid scoring or blending configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid bounds for {name}: lo ({lo}) must be below hi ({hi})")]
    InvalidBounds { name: String, lo: f64, hi: f64 },

    #[error("blend weights must sum to 1.0, got: {0}")]
    WeightsSum(f64),

    #[error("all weights must be non-negative")]
    NegativeWeight,

    #[error("indicator period for {0} must be greater than zero")]
    ZeroPeriod(&'static str),

    #[error("failed to load scoring config: {0}")]
    Load(String),

    #[error("invalid refresh schedule '{expr}': {reason}")]
    Schedule { expr: String, reason: String },
}

/// Failure talking to an upstream market data source
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{source_name} responded with status {status}: {body}")]
    Api {
        source_name: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected payload: {0}")]
    Parse(String),
}

/// Errors surfaced by the rating agent and its output surfaces
#[derive(Debug, Error)]
pub enum RatingError {
    #[error("missing {0} score set; all three timeframes are required to blend")]
    MissingTimeframe(Timeframe),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("csv export failed: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
