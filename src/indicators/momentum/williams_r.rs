//! Williams %R

use crate::common::math;
use crate::models::indicators::Candle;

/// %R = -100 * (Highest High - Close) / (Highest High - Lowest Low)
///
/// Ranges from -100 (close at the period low) to 0 (close at the period high).
/// A window with no high-low range yields NaN.
pub fn calculate_williams_r(candles: &[Candle], period: usize) -> Vec<f64> {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();

    let highest = math::rolling_max(&highs, period);
    let lowest = math::rolling_min(&lows, period);

    candles
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(candle, (&hh, &ll))| {
            let range = hh - ll;
            if range.is_nan() || range == 0.0 {
                f64::NAN
            } else {
                -100.0 * (hh - candle.close) / range
            }
        })
        .collect()
}

/// Calculate Williams %R with default period (14)
pub fn calculate_williams_r_default(candles: &[Candle]) -> Vec<f64> {
    calculate_williams_r(candles, 14)
}
