//! Moving-average cross differential

use crate::common::math;
use crate::models::indicators::Candle;

/// SMA(fast) - SMA(slow) of closes, in raw price units
///
/// Positive once the fast average has crossed above the slow one.
pub fn calculate_ma_cross(candles: &[Candle], fast_period: usize, slow_period: usize) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::sma_series(&closes, fast_period);
    let slow = math::sma_series(&closes, slow_period);

    fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
}

/// Calculate the MA cross with default periods (20, 50)
pub fn calculate_ma_cross_default(candles: &[Candle]) -> Vec<f64> {
    calculate_ma_cross(candles, 20, 50)
}
