//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::indicators::Candle;

/// Calculate ADX at every candle
///
/// ADX measures trend strength regardless of direction. True range, +DM and
/// -DM are smoothed with Wilder's method, +DI/-DI derived from them, and ADX
/// is the Wilder average of DX. The first value needs `2 * period` candles.
/// A series without any range or directional movement has no ADX (NaN).
pub fn calculate_adx(candles: &[Candle], period: usize) -> Vec<f64> {
    let len = candles.len();
    let mut tr_values = vec![f64::NAN; len];
    let mut plus_dm_values = vec![f64::NAN; len];
    let mut minus_dm_values = vec![f64::NAN; len];

    for i in 1..len {
        let current = &candles[i];
        let previous = &candles[i - 1];

        tr_values[i] = math::true_range(current.high, current.low, previous.close);

        let up_move = current.high - previous.high;
        let down_move = previous.low - current.low;

        plus_dm_values[i] = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        minus_dm_values[i] = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };
    }

    let atr = math::wilder_series(&tr_values, period);
    let plus_dm_avg = math::wilder_series(&plus_dm_values, period);
    let minus_dm_avg = math::wilder_series(&minus_dm_values, period);

    let dx_values: Vec<f64> = (0..len)
        .map(|i| {
            // No range or no directional movement yet: DI and DX are undefined
            if atr[i].is_nan() || atr[i] <= 0.0 {
                return f64::NAN;
            }
            let plus_di = 100.0 * (plus_dm_avg[i] / atr[i]);
            let minus_di = 100.0 * (minus_dm_avg[i] / atr[i]);

            let di_sum = plus_di + minus_di;
            if di_sum > 0.0 {
                100.0 * ((plus_di - minus_di).abs() / di_sum)
            } else {
                f64::NAN
            }
        })
        .collect();

    math::wilder_series(&dx_values, period)
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(candles: &[Candle]) -> Vec<f64> {
    calculate_adx(candles, 14)
}
