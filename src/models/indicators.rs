use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Bar built from a single price observation
    pub fn flat(price: f64, timestamp: DateTime<Utc>) -> Self {
        Self::new(price, price, price, price, 0.0, timestamp)
    }

    pub fn median_price(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Latest value of every indicator for one timeframe.
///
/// `None` marks a value that could not be computed (not enough history or a
/// zero denominator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub macd_histogram: Option<f64>,
    pub adx: Option<f64>,
    pub ma_cross: Option<f64>,
    pub ao: Option<f64>,
    pub rsi: Option<f64>,
    pub cci: Option<f64>,
    pub williams_r: Option<f64>,
    pub swing_index: Option<f64>,
    /// Rolling standard deviation of close-to-close percentage changes
    pub stability: Option<f64>,
}
