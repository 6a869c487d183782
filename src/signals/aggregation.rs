//! Overall rating from a blended score set

use crate::models::score::ScoreSet;

/// Overall rating and reported confidence of one asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub overall_rating: f64,
    pub confidence: u8,
}

/// Averages the blended indicator scores into a single rating
pub struct Aggregator;

impl Aggregator {
    /// Unweighted mean of the eight indicator scores; confidence is excluded
    pub fn overall_rating(blended: &ScoreSet) -> f64 {
        let (sum, count) = blended
            .indicator_scores()
            .fold((0.0, 0usize), |(sum, count), (_, score)| (sum + score, count + 1));
        sum / count as f64
    }

    /// Blended confidence as reported: rounded to an integer in [0, 100]
    pub fn reported_confidence(blended: &ScoreSet) -> u8 {
        blended.confidence.round().clamp(0.0, 100.0) as u8
    }

    pub fn rate(blended: &ScoreSet) -> Rating {
        Rating {
            overall_rating: Self::overall_rating(blended),
            confidence: Self::reported_confidence(blended),
        }
    }
}
