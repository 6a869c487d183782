//! Unit tests for indicator history requirements and the indicator frame

use chrono::{Duration, TimeZone, Utc};
use trendrater::config::IndicatorParams;
use trendrater::indicators::registry::{stability_min_candles, HistoryCheck, IndicatorCategory, IndicatorKind};
use trendrater::indicators::{latest_indicators, IndicatorFrame};
use trendrater::models::indicators::Candle;

fn walk(count: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.2;
            Candle::new(base, base + 1.0, base - 1.0, base + 0.3, 100.0, start + Duration::hours(i as i64))
        })
        .collect()
}

#[test]
fn test_default_minimum_history() {
    let params = IndicatorParams::default();
    let expected = [
        (IndicatorKind::Macd, 34),
        (IndicatorKind::Adx, 28),
        (IndicatorKind::MaCross, 50),
        (IndicatorKind::Ao, 34),
        (IndicatorKind::Rsi, 15),
        (IndicatorKind::Cci, 20),
        (IndicatorKind::WilliamsR, 14),
        (IndicatorKind::SwingIndex, 1),
    ];
    for (kind, required) in expected {
        assert_eq!(kind.min_candles(&params), required, "{}", kind.key());
    }
    assert_eq!(stability_min_candles(&params), 11);
    assert_eq!(HistoryCheck::required_for_all(&params), 50);
}

#[test]
fn test_history_check_lists_missing_indicators() {
    let check = HistoryCheck::evaluate(30, &IndicatorParams::default());
    assert!(!check.is_complete());
    assert!(check.is_missing(IndicatorKind::MaCross));
    assert!(check.is_missing(IndicatorKind::Macd));
    assert!(check.is_missing(IndicatorKind::Ao));
    assert!(!check.is_missing(IndicatorKind::Adx));
    assert!(check.stability_defined);

    assert!(HistoryCheck::evaluate(50, &IndicatorParams::default()).is_complete());
}

#[test]
fn test_categories() {
    assert_eq!(IndicatorKind::Rsi.category(), IndicatorCategory::Momentum);
    assert_eq!(IndicatorKind::Adx.category(), IndicatorCategory::Trend);
    assert_eq!(IndicatorKind::SwingIndex.category(), IndicatorCategory::Structure);
}

#[test]
fn test_frame_matches_required_history() {
    let params = IndicatorParams::default();
    let candles = walk(60);
    let frame = IndicatorFrame::compute(&candles, &params);
    assert_eq!(frame.len(), 60);

    for kind in IndicatorKind::ALL {
        let first_defined = frame.column(kind).iter().position(|v| v.is_finite());
        assert_eq!(
            first_defined,
            Some(kind.min_candles(&params) - 1),
            "{} defined too early or too late",
            kind.key()
        );
    }
}

#[test]
fn test_latest_snapshot_with_full_history() {
    let snapshot = latest_indicators(&walk(80), &IndicatorParams::default());
    for kind in IndicatorKind::ALL {
        assert!(snapshot.value(kind).is_some(), "{} undefined", kind.key());
    }
    assert!(snapshot.stability.is_some());
}

#[test]
fn test_latest_snapshot_with_short_history() {
    let snapshot = latest_indicators(&walk(20), &IndicatorParams::default());
    assert!(snapshot.ma_cross.is_none());
    assert!(snapshot.macd_histogram.is_none());
    assert!(snapshot.adx.is_none());
    assert!(snapshot.rsi.is_some());
    assert!(snapshot.swing_index.is_some());
}
