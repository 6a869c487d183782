//! MACD (Moving Average Convergence Divergence) histogram

use crate::common::math;
use crate::models::indicators::Candle;

/// Calculate the MACD histogram at every candle
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd_histogram(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<f64> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_ema = math::ema_series(&closes, fast_period);
    let slow_ema = math::ema_series(&closes, slow_period);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();

    // EMA of the MACD line; starts once the slow EMA exists
    let signal_line = math::ema_series(&macd_line, signal_period);

    macd_line
        .iter()
        .zip(&signal_line)
        .map(|(macd, signal)| macd - signal)
        .collect()
}

/// Calculate the MACD histogram with default periods (12, 26, 9)
pub fn calculate_macd_histogram_default(candles: &[Candle]) -> Vec<f64> {
    calculate_macd_histogram(candles, 12, 26, 9)
}
