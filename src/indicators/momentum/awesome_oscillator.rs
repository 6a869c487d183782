//! Awesome Oscillator

use crate::common::math;
use crate::models::indicators::Candle;

/// AO = SMA(fast) - SMA(slow) of the median price (high + low) / 2
pub fn calculate_awesome_oscillator(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
) -> Vec<f64> {
    let medians: Vec<f64> = candles.iter().map(Candle::median_price).collect();
    let fast = math::sma_series(&medians, fast_period);
    let slow = math::sma_series(&medians, slow_period);

    fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
}

/// Calculate AO with default periods (5, 34)
pub fn calculate_awesome_oscillator_default(candles: &[Candle]) -> Vec<f64> {
    calculate_awesome_oscillator(candles, 5, 34)
}
