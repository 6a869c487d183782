//! Close-price stability (rolling volatility proxy)

use crate::common::math;
use crate::models::indicators::Candle;

/// Sample standard deviation of the last `window` close-to-close percentage
/// changes, at every candle. Needs `window + 1` candles.
pub fn calculate_stability(candles: &[Candle], window: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let changes = math::pct_change(&closes);
    math::rolling(&changes, window, math::sample_std)
}

/// Calculate stability over the default 10 changes
pub fn calculate_stability_default(candles: &[Candle]) -> Vec<f64> {
    calculate_stability(candles, 10)
}
