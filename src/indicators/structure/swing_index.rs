//! Swing Index proxy
//!
//! The canonical Wilder Swing Index needs the previous candle's open and
//! close plus a limit-move constant. This is a single-candle approximation:
//! where the close sits inside the bar's own range. It is kept as a named
//! approximation, not the textbook indicator.

use crate::models::indicators::Candle;

/// Guards the division on zero-range candles
pub const SWING_EPSILON: f64 = 1e-9;

/// (close - open) / (high - low + epsilon) for one candle
pub fn swing_index_proxy(candle: &Candle) -> f64 {
    (candle.close - candle.open) / (candle.high - candle.low + SWING_EPSILON)
}

/// Swing Index proxy at every candle
pub fn calculate_swing_index(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(swing_index_proxy).collect()
}
