//! Market scenarios run through the full engine

use chrono::{Duration, TimeZone, Utc};
use trendrater::models::indicators::Candle;
use trendrater::models::report::TimeframeScores;
use trendrater::models::score::ScoreSet;
use trendrater::signals::engine::{RatingEngine, TimeframeCandles};

fn create_uptrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.5;
            Candle::new(base, base + 0.5, base - 0.1, base + 0.4, 1000.0, start + Duration::days(i as i64))
        })
        .collect()
}

fn create_downtrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 200.0 - i as f64 * 0.5;
            Candle::new(base, base + 0.1, base - 0.5, base - 0.4, 1000.0, start + Duration::days(i as i64))
        })
        .collect()
}

fn same_on_every_timeframe(candles: Vec<Candle>) -> TimeframeCandles {
    TimeframeCandles {
        daily: candles.clone(),
        four_hour: candles.clone(),
        hourly: candles,
    }
}

#[test]
fn test_uptrend_rates_high_with_confidence() {
    let engine = RatingEngine::default();
    let report = engine.rate_asset("UP", &same_on_every_timeframe(create_uptrend_candles(90)));

    assert!(report.overall_rating > 65.0, "rating {}", report.overall_rating);
    assert!(report.confidence >= 90, "confidence {}", report.confidence);
    assert!((report.blended.rsi - 100.0).abs() < 1e-9);
    assert!((report.blended.ma_cross - 100.0).abs() < 1e-9);
}

#[test]
fn test_downtrend_rates_low() {
    let engine = RatingEngine::default();
    let report = engine.rate_asset("DOWN", &same_on_every_timeframe(create_downtrend_candles(90)));

    assert!(report.overall_rating < 40.0, "rating {}", report.overall_rating);
    assert!(report.blended.rsi.abs() < 1e-9);
    // trend strength is direction-agnostic
    assert!(report.blended.adx > 90.0);
}

#[test]
fn test_uptrend_beats_downtrend() {
    let engine = RatingEngine::default();
    let up = engine.rate_asset("UP", &same_on_every_timeframe(create_uptrend_candles(60)));
    let down = engine.rate_asset("DOWN", &same_on_every_timeframe(create_downtrend_candles(60)));
    assert!(up.overall_rating > down.overall_rating);
}

#[test]
fn test_short_history_falls_back_to_neutral() {
    let engine = RatingEngine::default();
    let scores = engine.score_timeframe(&create_uptrend_candles(30));
    // MA cross needs 50 candles, MACD and AO 34
    assert_eq!(scores.ma_cross, 50.0);
    assert_eq!(scores.macd, 50.0);
    assert_eq!(scores.ao, 50.0);
    assert_eq!(scores.rsi, 100.0);
}

#[test]
fn test_daily_dominant_blend_scenario() {
    let engine = RatingEngine::default();
    let mut daily = ScoreSet::uniform(50.0);
    daily.macd = 80.0;
    daily.adx = 60.0;
    daily.confidence = 70.0;

    let report = engine.rate(
        "MIX",
        TimeframeScores::new(daily, ScoreSet::uniform(40.0), ScoreSet::uniform(20.0)),
    );

    assert!((report.blended.macd - 56.0).abs() < 1e-9);
    // (56 + 46 + 6 × 41) / 8
    assert!((report.overall_rating - 43.5).abs() < 1e-9);
    assert_eq!(report.confidence, 51);
}
