//! Unit tests for the overall rating

use trendrater::indicators::registry::IndicatorKind;
use trendrater::models::score::ScoreSet;
use trendrater::signals::aggregation::Aggregator;

#[test]
fn test_all_seventy_rates_seventy() {
    for confidence in [0.0, 33.3, 100.0] {
        let mut blended = ScoreSet::uniform(70.0);
        blended.confidence = confidence;
        assert!((Aggregator::overall_rating(&blended) - 70.0).abs() < 1e-9);
    }
}

#[test]
fn test_overall_rating_is_unweighted_mean() {
    let mut blended = ScoreSet::uniform(0.0);
    blended.set(IndicatorKind::Macd.into(), 80.0);
    blended.set(IndicatorKind::SwingIndex.into(), 40.0);
    blended.confidence = 100.0;
    assert!((Aggregator::overall_rating(&blended) - 15.0).abs() < 1e-9);
}

#[test]
fn test_reported_confidence_rounds_blended_value() {
    let mut blended = ScoreSet::uniform(50.0);
    blended.confidence = 66.6;
    let rating = Aggregator::rate(&blended);
    assert_eq!(rating.confidence, 67);
    assert!((rating.overall_rating - 50.0).abs() < 1e-9);
}
