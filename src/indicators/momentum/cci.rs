//! CCI (Commodity Channel Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

const CCI_CONSTANT: f64 = 0.015;

/// Calculate CCI at every candle
///
/// CCI = (TP - SMA(TP)) / (0.015 * Mean Deviation)
/// where TP = Typical Price = (High + Low + Close) / 3
///
/// A window with zero mean deviation yields NaN.
pub fn calculate_cci(candles: &[Candle], period: usize) -> Vec<f64> {
    let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();

    math::rolling(&typical, period, |window| {
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let mean_dev = math::mean_deviation(window);
        if mean_dev == 0.0 {
            return f64::NAN;
        }
        let current = window[window.len() - 1];
        (current - mean) / (CCI_CONSTANT * mean_dev)
    })
}

/// Calculate CCI with default period (20)
pub fn calculate_cci_default(candles: &[Candle]) -> Vec<f64> {
    calculate_cci(candles, 20)
}
