//! Rating engine: candles → indicators → scores → blend → rating

use crate::config::ScoringConfig;
use crate::error::ConfigError;
use crate::indicators::frame::IndicatorFrame;
use crate::indicators::registry::HistoryCheck;
use crate::models::indicators::Candle;
use crate::models::report::{AssetReport, TimeframeScores};
use crate::models::score::ScoreSet;
use crate::models::timeframe::Timeframe;
use crate::signals::aggregation::Aggregator;
use crate::signals::blending::TimeframeBlender;
use crate::signals::scoring::Scorer;
use tracing::debug;

/// Shortest series callers should hand to the engine
pub const MIN_CANDLES: usize = 50;

/// Candle series of one asset at every timeframe
#[derive(Debug, Clone, Default)]
pub struct TimeframeCandles {
    pub daily: Vec<Candle>,
    pub four_hour: Vec<Candle>,
    pub hourly: Vec<Candle>,
}

impl TimeframeCandles {
    pub fn get(&self, timeframe: Timeframe) -> &[Candle] {
        match timeframe {
            Timeframe::Daily => &self.daily,
            Timeframe::FourHour => &self.four_hour,
            Timeframe::Hourly => &self.hourly,
        }
    }
}

/// Pure, synchronous scoring pipeline shared by the agent and the tests
#[derive(Debug, Clone)]
pub struct RatingEngine {
    config: ScoringConfig,
    scorer: Scorer,
    blender: TimeframeBlender,
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::build(ScoringConfig::default())
    }
}

impl RatingEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ScoringConfig) -> Self {
        Self {
            scorer: Scorer::new(config.bounds.clone(), config.confidence.clone()),
            blender: TimeframeBlender::new(config.blend),
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn history_check(&self, candles: &[Candle]) -> HistoryCheck {
        HistoryCheck::evaluate(candles.len(), &self.config.indicators)
    }

    pub fn indicator_frame(&self, candles: &[Candle]) -> IndicatorFrame {
        IndicatorFrame::compute(candles, &self.config.indicators)
    }

    /// Score the latest candle of one series
    ///
    /// Short series are scored anyway; indicators lacking history fall back
    /// to the neutral score.
    pub fn score_timeframe(&self, candles: &[Candle]) -> ScoreSet {
        let check = self.history_check(candles);
        if !check.is_complete() {
            debug!(
                candles = check.available,
                missing = ?check.missing,
                stability_defined = check.stability_defined,
                "Scoring with incomplete history, undefined indicators score neutral"
            );
        }

        let snapshot = self.indicator_frame(candles).latest();
        self.scorer.score(&snapshot)
    }

    pub fn score_timeframes(&self, candles: &TimeframeCandles) -> TimeframeScores {
        TimeframeScores::new(
            self.score_timeframe(&candles.daily),
            self.score_timeframe(&candles.four_hour),
            self.score_timeframe(&candles.hourly),
        )
    }

    /// Blend already scored timeframes and aggregate them into a report
    pub fn rate(&self, symbol: &str, timeframes: TimeframeScores) -> AssetReport {
        let blended = self.blender.blend(&timeframes);
        let rating = Aggregator::rate(&blended);

        AssetReport {
            symbol: symbol.to_string(),
            timeframes,
            blended,
            overall_rating: rating.overall_rating,
            confidence: rating.confidence,
        }
    }

    pub fn rate_asset(&self, symbol: &str, candles: &TimeframeCandles) -> AssetReport {
        self.rate(symbol, self.score_timeframes(candles))
    }
}
