//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod report;
pub mod score;
pub mod timeframe;

pub use indicators::{Candle, IndicatorSnapshot};
pub use report::{AssetListing, AssetReport, RatingRow, RatingTable, TimeframeScores};
pub use score::{ScoreKey, ScoreSet};
pub use timeframe::Timeframe;
