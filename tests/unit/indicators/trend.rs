//! Unit tests for ADX and the moving-average cross

use chrono::{Duration, TimeZone, Utc};
use trendrater::indicators::trend::{calculate_adx_default, calculate_ma_cross, calculate_ma_cross_default};
use trendrater::models::indicators::Candle;

fn trending_candles(count: usize, step: f64) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * step;
            Candle::new(
                base,
                base + 0.3,
                base - 0.3,
                base + step * 0.8,
                500.0,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_adx_needs_two_periods() {
    let adx = calculate_adx_default(&trending_candles(28, 1.0));
    assert!(adx[26].is_nan());
    assert!(adx[27].is_finite());

    let short = calculate_adx_default(&trending_candles(27, 1.0));
    assert!(short.iter().all(|v| v.is_nan()));
}

#[test]
fn test_adx_strong_in_both_directions() {
    let up = calculate_adx_default(&trending_candles(60, 1.0));
    let down = calculate_adx_default(&trending_candles(60, -1.0));
    assert!(up[59] > 90.0, "uptrend ADX {}", up[59]);
    assert!(down[59] > 90.0, "downtrend ADX {}", down[59]);
}

#[test]
fn test_adx_flat_market_is_undefined() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let candles: Vec<Candle> = (0..40)
        .map(|i| Candle::flat(10.0, start + Duration::days(i)))
        .collect();
    let adx = calculate_adx_default(&candles);
    assert!(adx.iter().all(|v| v.is_nan()));
}

#[test]
fn test_ma_cross_sign_follows_trend() {
    let up = calculate_ma_cross_default(&trending_candles(60, 1.0));
    let down = calculate_ma_cross_default(&trending_candles(60, -1.0));
    assert!(up[48].is_nan());
    // (sma20 - sma50) of a unit-slope line is 15
    assert!((up[59] - 15.0).abs() < 1e-9);
    assert!((down[59] + 15.0).abs() < 1e-9);
}

#[test]
fn test_ma_cross_custom_periods() {
    let cross = calculate_ma_cross(&trending_candles(10, 2.0), 2, 4);
    assert!(cross[2].is_nan());
    assert!((cross[9] - 2.0).abs() < 1e-9);
}
