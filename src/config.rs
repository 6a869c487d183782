//! Runtime and scoring configuration
//!
//! Runtime settings come from the environment (optionally a `.env` file).
//! Scoring policy (normalization bounds, confidence mix, blend weights and
//! indicator periods) is an immutable [`ScoringConfig`] handed to the scorer
//! and the blender at construction time.

use crate::error::ConfigError;
use crate::indicators::registry::IndicatorKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Deployment environment name (`ENVIRONMENT`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Settings for the agent, the exporter and the API server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub vs_currency: String,
    pub top_n: usize,
    pub lookback_days: u32,
    pub min_candles: usize,
    pub concurrency: usize,
    pub binance_base_url: String,
    pub coingecko_base_url: String,
    pub port: u16,
    pub refresh_interval_seconds: u64,
    pub output_file: String,
    pub scoring_config_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            vs_currency: "usd".to_string(),
            top_n: 20,
            lookback_days: 90,
            min_candles: crate::signals::engine::MIN_CANDLES,
            concurrency: 4,
            binance_base_url: "https://api.binance.com".to_string(),
            coingecko_base_url: "https://api.coingecko.com/api/v3".to_string(),
            port: 8080,
            refresh_interval_seconds: 0,
            output_file: "crypto_top20_ratings.csv".to_string(),
            scoring_config_path: None,
        }
    }
}

impl AppConfig {
    /// Read settings from the environment, keeping defaults for anything
    /// missing or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: get_environment(),
            vs_currency: env::var("VS_CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or(defaults.vs_currency),
            top_n: env_or("TOP_N", defaults.top_n),
            lookback_days: env_or("LOOKBACK_DAYS", defaults.lookback_days),
            min_candles: env_or("MIN_CANDLES", defaults.min_candles),
            concurrency: env_or("AGENT_CONCURRENCY", defaults.concurrency).max(1),
            binance_base_url: env::var("BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url),
            coingecko_base_url: env::var("COINGECKO_BASE_URL")
                .unwrap_or(defaults.coingecko_base_url),
            port: env_or("PORT", defaults.port),
            refresh_interval_seconds: env_or(
                "REFRESH_INTERVAL_SECONDS",
                defaults.refresh_interval_seconds,
            ),
            output_file: env::var("OUTPUT_FILE").unwrap_or(defaults.output_file),
            scoring_config_path: env::var("SCORING_CONFIG_PATH").ok(),
        }
    }

    /// Scoring policy from `SCORING_CONFIG_PATH`, or the defaults
    pub fn scoring_config(&self) -> Result<ScoringConfig, ConfigError> {
        match &self.scoring_config_path {
            Some(path) => ScoringConfig::from_json_file(path),
            None => Ok(ScoringConfig::default()),
        }
    }
}

/// Linear normalization range for one raw value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Bounds {
    pub const fn new_unchecked(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn new(name: &str, lo: f64, hi: f64) -> Result<Self, ConfigError> {
        let bounds = Self { lo, hi };
        bounds.validate(name)?;
        Ok(bounds)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.lo.is_finite() && self.hi.is_finite() && self.lo < self.hi) {
            return Err(ConfigError::InvalidBounds {
                name: name.to_string(),
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }
}

/// Per-indicator normalization bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBounds {
    pub macd: Bounds,
    pub adx: Bounds,
    pub ma_cross: Bounds,
    pub ao: Bounds,
    pub rsi: Bounds,
    pub cci: Bounds,
    pub williams_r: Bounds,
    pub swing_index: Bounds,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            macd: Bounds::new_unchecked(-0.02, 0.02),
            adx: Bounds::new_unchecked(10.0, 40.0),
            ma_cross: Bounds::new_unchecked(-5.0, 5.0),
            ao: Bounds::new_unchecked(-20.0, 20.0),
            rsi: Bounds::new_unchecked(30.0, 70.0),
            cci: Bounds::new_unchecked(-200.0, 200.0),
            williams_r: Bounds::new_unchecked(-100.0, 0.0),
            swing_index: Bounds::new_unchecked(-1.0, 1.0),
        }
    }
}

impl ScoreBounds {
    pub fn get(&self, kind: IndicatorKind) -> Bounds {
        match kind {
            IndicatorKind::Macd => self.macd,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::MaCross => self.ma_cross,
            IndicatorKind::Ao => self.ao,
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Cci => self.cci,
            IndicatorKind::WilliamsR => self.williams_r,
            IndicatorKind::SwingIndex => self.swing_index,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        IndicatorKind::ALL
            .iter()
            .try_for_each(|kind| self.get(*kind).validate(kind.key()))
    }
}

/// How trend strength and price stability mix into confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidencePolicy {
    pub adx_bounds: Bounds,
    pub stability_bounds: Bounds,
    pub adx_weight: f64,
    pub stability_weight: f64,
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self {
            adx_bounds: Bounds::new_unchecked(10.0, 40.0),
            stability_bounds: Bounds::new_unchecked(0.0, 0.05),
            adx_weight: 0.6,
            stability_weight: 0.4,
        }
    }
}

impl ConfidencePolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.adx_bounds.validate("confidence.adx")?;
        self.stability_bounds.validate("confidence.stability")?;
        check_weights(&[self.adx_weight, self.stability_weight])
    }
}

/// Per-timeframe blend weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub daily: f64,
    pub four_hour: f64,
    pub hourly: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            daily: 0.5,
            four_hour: 0.3,
            hourly: 0.2,
        }
    }
}

impl BlendWeights {
    pub fn new(daily: f64, four_hour: f64, hourly: f64) -> Result<Self, ConfigError> {
        let weights = Self {
            daily,
            four_hour,
            hourly,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weights(&[self.daily, self.four_hour, self.hourly])
    }

    pub fn total(&self) -> f64 {
        self.daily + self.four_hour + self.hourly
    }
}

fn check_weights(weights: &[f64]) -> Result<(), ConfigError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ConfigError::NegativeWeight);
    }
    let total: f64 = weights.iter().sum();
    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigError::WeightsSum(total));
    }
    Ok(())
}

/// Rolling-window lengths for every indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub adx_period: usize,
    pub ma_fast: usize,
    pub ma_slow: usize,
    pub ao_fast: usize,
    pub ao_slow: usize,
    pub rsi_period: usize,
    pub cci_period: usize,
    pub williams_period: usize,
    pub stability_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            adx_period: 14,
            ma_fast: 20,
            ma_slow: 50,
            ao_fast: 5,
            ao_slow: 34,
            rsi_period: 14,
            cci_period: 20,
            williams_period: 14,
            stability_window: 10,
        }
    }
}

impl IndicatorParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("adx_period", self.adx_period),
            ("ma_fast", self.ma_fast),
            ("ma_slow", self.ma_slow),
            ("ao_fast", self.ao_fast),
            ("ao_slow", self.ao_slow),
            ("rsi_period", self.rsi_period),
            ("cci_period", self.cci_period),
            ("williams_period", self.williams_period),
            ("stability_window", self.stability_window),
        ];
        match periods.iter().find(|(_, period)| *period == 0) {
            Some((name, _)) => Err(ConfigError::ZeroPeriod(*name)),
            None => Ok(()),
        }
    }
}

/// Complete scoring and blending policy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub bounds: ScoreBounds,
    pub confidence: ConfidencePolicy,
    pub blend: BlendWeights,
    pub indicators: IndicatorParams,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        self.confidence.validate()?;
        self.blend.validate()?;
        self.indicators.validate()
    }

    /// Parse and validate a JSON policy; omitted sections keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }
}
