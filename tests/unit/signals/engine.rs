//! Unit tests for the rating engine

use chrono::{Duration, TimeZone, Utc};
use trendrater::config::{BlendWeights, ScoringConfig};
use trendrater::error::ConfigError;
use trendrater::models::indicators::Candle;
use trendrater::signals::engine::{RatingEngine, TimeframeCandles};

fn flat_candles(count: usize, price: f64) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| Candle::flat(price, start + Duration::hours(i as i64)))
        .collect()
}

#[test]
fn test_engine_rejects_invalid_config() {
    let mut config = ScoringConfig::default();
    config.blend = BlendWeights {
        daily: 0.6,
        four_hour: 0.3,
        hourly: 0.2,
    };
    assert!(matches!(RatingEngine::new(config), Err(ConfigError::WeightsSum(_))));

    let mut config = ScoringConfig::default();
    config.bounds.rsi.lo = 70.0;
    assert!(matches!(RatingEngine::new(config), Err(ConfigError::InvalidBounds { .. })));
}

#[test]
fn test_flat_market_scores() {
    let engine = RatingEngine::default();
    let scores = engine.score_timeframe(&flat_candles(60, 100.0));

    assert!((scores.macd - 50.0).abs() < 1e-6);
    assert_eq!(scores.adx, 50.0);
    assert!((scores.ma_cross - 50.0).abs() < 1e-6);
    assert!((scores.ao - 50.0).abs() < 1e-6);
    assert_eq!(scores.rsi, 100.0);
    assert_eq!(scores.cci, 50.0);
    assert_eq!(scores.williams_r, 50.0);
    assert_eq!(scores.swing_index, 50.0);
    // undefined adx scores 50, stability score 100
    assert_eq!(scores.confidence, 70.0);
}

#[test]
fn test_empty_series_scores_neutral() {
    let scores = RatingEngine::default().score_timeframe(&[]);
    for (_, score) in scores.iter() {
        assert_eq!(score, 50.0);
    }
}

#[test]
fn test_rate_asset_flat_market() {
    let engine = RatingEngine::default();
    let candles = TimeframeCandles {
        daily: flat_candles(60, 100.0),
        four_hour: flat_candles(60, 100.0),
        hourly: flat_candles(60, 100.0),
    };
    let report = engine.rate_asset("BTC", &candles);

    assert_eq!(report.symbol, "BTC");
    // seven neutral scores and rsi 100
    assert!((report.overall_rating - 56.25).abs() < 1e-6);
    assert_eq!(report.confidence, 70);
    assert!((report.blended.confidence - 70.0).abs() < 1e-9);
    assert_eq!(report.timeframes.daily, report.timeframes.hourly);
}

#[test]
fn test_history_check_reflects_series_length() {
    let engine = RatingEngine::default();
    assert!(engine.history_check(&flat_candles(50, 1.0)).is_complete());
    assert!(!engine.history_check(&flat_candles(49, 1.0)).is_complete());
}
