//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// Calculate RSI at every candle using Wilder's smoothing
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Vec<f64> {
    let mut gains = vec![f64::NAN; candles.len()];
    let mut losses = vec![f64::NAN; candles.len()];

    for i in 1..candles.len() {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains[i] = change;
            losses[i] = 0.0;
        } else {
            gains[i] = 0.0;
            losses[i] = change.abs();
        }
    }

    let avg_gain = math::wilder_series(&gains, period);
    let avg_loss = math::wilder_series(&losses, period);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| {
            if gain.is_nan() || loss.is_nan() {
                f64::NAN
            } else if loss == 0.0 {
                100.0
            } else {
                let rs = gain / loss;
                100.0 - (100.0 / (1.0 + rs))
            }
        })
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Vec<f64> {
    calculate_rsi(candles, 14)
}
