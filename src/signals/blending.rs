//! Multi-timeframe blending

use crate::config::BlendWeights;
use crate::models::report::TimeframeScores;
use crate::models::score::{ScoreKey, ScoreSet};

/// Weighted combination of the daily, 4h and hourly score sets.
///
/// Every key is blended the same way, confidence included, so the blended
/// confidence is the weighted average of the per-timeframe confidences.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeframeBlender {
    weights: BlendWeights,
}

impl TimeframeBlender {
    pub fn new(weights: BlendWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &BlendWeights {
        &self.weights
    }

    pub fn blend_key(&self, scores: &TimeframeScores, key: ScoreKey) -> f64 {
        let blended = scores.daily.get(key) * self.weights.daily
            + scores.four_hour.get(key) * self.weights.four_hour
            + scores.hourly.get(key) * self.weights.hourly;
        blended.clamp(0.0, 100.0)
    }

    pub fn blend(&self, scores: &TimeframeScores) -> ScoreSet {
        let mut blended = ScoreSet::uniform(0.0);
        for key in ScoreKey::ALL {
            blended.set(key, self.blend_key(scores, key));
        }
        blended
    }

    pub fn blend_sets(&self, daily: &ScoreSet, four_hour: &ScoreSet, hourly: &ScoreSet) -> ScoreSet {
        self.blend(&TimeframeScores::new(*daily, *four_hour, *hourly))
    }
}
