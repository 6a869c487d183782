//! Score normalization and confidence calculation

use crate::config::{Bounds, ConfidencePolicy, ScoreBounds};
use crate::indicators::registry::IndicatorKind;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::score::ScoreSet;

/// Score given to a value that could not be computed
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Normalize a raw value to the 0-100 score range
///
/// Undefined inputs (`None` or NaN) map to the neutral score 50; everything
/// else is rescaled linearly between `lo` and `hi` and clamped.
pub fn normalize(value: Option<f64>, lo: f64, hi: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => (100.0 * (v - lo) / (hi - lo)).clamp(0.0, 100.0),
        _ => NEUTRAL_SCORE,
    }
}

/// [`normalize`] against a bounds pair
pub fn normalize_within(value: Option<f64>, bounds: Bounds) -> f64 {
    normalize(value, bounds.lo, bounds.hi)
}

/// Calculate confidence from trend strength and price stability
///
/// Stronger trends (ADX) and calmer prices (lower stability) both raise
/// confidence. The result is rounded to an integer in [0, 100].
pub fn calculate_confidence(
    adx: Option<f64>,
    stability: Option<f64>,
    policy: &ConfidencePolicy,
) -> f64 {
    let adx_score = normalize_within(adx, policy.adx_bounds);
    let stability_score = 100.0 - normalize_within(stability, policy.stability_bounds);

    (adx_score * policy.adx_weight + stability_score * policy.stability_weight)
        .round()
        .clamp(0.0, 100.0)
}

/// Maps the latest indicator values of one timeframe to a [`ScoreSet`]
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    bounds: ScoreBounds,
    confidence: ConfidencePolicy,
}

impl Scorer {
    pub fn new(bounds: ScoreBounds, confidence: ConfidencePolicy) -> Self {
        Self { bounds, confidence }
    }

    pub fn score_indicator(&self, kind: IndicatorKind, value: Option<f64>) -> f64 {
        normalize_within(value, self.bounds.get(kind))
    }

    pub fn score(&self, snapshot: &IndicatorSnapshot) -> ScoreSet {
        let mut scores = ScoreSet::uniform(NEUTRAL_SCORE);
        for kind in IndicatorKind::ALL {
            scores.set(kind.into(), self.score_indicator(kind, snapshot.value(kind)));
        }
        scores.confidence = calculate_confidence(snapshot.adx, snapshot.stability, &self.confidence);
        scores
    }
}
