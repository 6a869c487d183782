//! Reference values for the Wilder and EMA based indicators on a fixed,
//! non-monotone OHLC series (45 hourly candles: a rally, a pullback, a
//! second leg up and a sell-off). Expected values were computed
//! independently with the textbook formulas: SMA-seeded EMAs, Wilder
//! running sums for TR/DM, and mean absolute deviation for CCI.

use chrono::{Duration, TimeZone, Utc};
use trendrater::indicators::momentum::{calculate_cci, calculate_macd_histogram, calculate_rsi};
use trendrater::indicators::trend::calculate_adx;
use trendrater::models::indicators::Candle;

const TOLERANCE: f64 = 1e-6;

const OPENS: [f64; 45] = [
    100.50, 100.49, 101.68, 102.64, 101.62, 101.23, 101.63, 101.44, 101.79,
    102.61, 103.36, 103.26, 102.08, 102.24, 103.00, 102.76, 103.49, 104.52,
    104.15, 103.45, 103.10, 103.71, 104.44, 104.35, 105.18, 105.31, 103.68,
    103.00, 103.41, 103.59, 103.71, 103.54, 103.56, 102.90, 101.38, 101.67,
    102.60, 102.20, 102.15, 102.10, 101.32, 100.46, 99.99, 100.87, 101.45,
];

const HIGHS: [f64; 45] = [
    101.00, 101.24, 102.15, 103.09, 102.21, 102.05, 101.94, 101.93, 102.54,
    103.20, 103.84, 103.59, 102.98, 102.61, 103.46, 103.36, 104.21, 105.02,
    104.48, 104.24, 103.74, 104.12, 104.93, 105.05, 105.70, 105.70, 104.22,
    103.85, 103.76, 104.09, 104.33, 104.27, 104.01, 103.29, 102.26, 102.06,
    103.09, 102.64, 102.97, 102.58, 101.65, 101.18, 100.66, 101.33, 101.91,
];

const LOWS: [f64; 45] = [
    100.20, 100.06, 101.08, 101.80, 101.25, 100.86, 100.88, 100.69, 101.36,
    102.31, 102.55, 102.70, 101.61, 101.84, 102.24, 102.28, 102.99, 103.87,
    103.55, 103.02, 102.60, 102.88, 103.96, 103.97, 104.70, 104.41, 103.26,
    102.69, 102.79, 102.76, 103.24, 103.18, 102.84, 102.25, 100.89, 101.25,
    101.89, 101.76, 101.65, 101.50, 100.61, 100.08, 99.51, 100.08, 100.80,
];

const CLOSES: [f64; 45] = [
    100.50, 100.89, 101.58, 102.27, 101.82, 101.55, 101.35, 101.19, 102.13,
    102.77, 102.98, 103.20, 102.48, 102.20, 102.61, 102.90, 103.84, 104.29,
    103.86, 103.76, 103.31, 103.35, 104.32, 104.74, 105.20, 104.91, 103.77,
    103.38, 103.23, 103.26, 103.98, 103.80, 103.22, 102.73, 101.76, 101.75,
    102.20, 102.23, 102.54, 101.97, 100.96, 100.68, 100.29, 100.57, 101.22,
];

fn mixed_candles() -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    (0..CLOSES.len())
        .map(|i| {
            Candle::new(
                OPENS[i],
                HIGHS[i],
                LOWS[i],
                CLOSES[i],
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn assert_series(series: &[f64], first_defined: usize, expected: &[(usize, f64)]) {
    assert_eq!(series.len(), CLOSES.len());
    assert!(series[..first_defined].iter().all(|v| v.is_nan()));
    for &(index, value) in expected {
        assert!(
            (series[index] - value).abs() < TOLERANCE,
            "index {}: got {}, expected {}",
            index,
            series[index],
            value
        );
    }
}

#[test]
fn test_rsi_reference_values() {
    let rsi = calculate_rsi(&mixed_candles(), 14);
    assert_series(
        &rsi,
        14,
        &[(14, 66.82615629984052), (29, 54.035174342051995), (44, 42.80616055429097)],
    );
}

#[test]
fn test_macd_histogram_reference_values() {
    let histogram = calculate_macd_histogram(&mixed_candles(), 12, 26, 9);
    assert_series(
        &histogram,
        33,
        &[
            (33, -0.3296363908996006),
            (38, -0.3072644020147194),
            (44, -0.2851404390965116),
        ],
    );
}

#[test]
fn test_cci_reference_values() {
    let cci = calculate_cci(&mixed_candles(), 20);
    assert_series(
        &cci,
        19,
        &[(19, 96.93372898120667), (31, 10.69225496915812), (44, -70.73995638019089)],
    );
}

#[test]
fn test_adx_reference_values() {
    let adx = calculate_adx(&mixed_candles(), 14);
    assert_series(
        &adx,
        27,
        &[(27, 34.696730568009194), (35, 25.10524217000104), (44, 18.813468452725058)],
    );
}
