use crate::error::RatingError;
use crate::indicators::registry::IndicatorKind;
use crate::models::score::{ScoreKey, ScoreSet};
use crate::models::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An asset as listed by the market-cap ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetListing {
    pub symbol: String,
    pub id: String,
    pub name: String,
}

impl AssetListing {
    pub fn new(symbol: impl Into<String>, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The three per-timeframe score sets of one asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeScores {
    #[serde(rename = "1d")]
    pub daily: ScoreSet,
    #[serde(rename = "4h")]
    pub four_hour: ScoreSet,
    #[serde(rename = "1h")]
    pub hourly: ScoreSet,
}

impl TimeframeScores {
    pub fn new(daily: ScoreSet, four_hour: ScoreSet, hourly: ScoreSet) -> Self {
        Self {
            daily,
            four_hour,
            hourly,
        }
    }

    /// Assemble the triple from keyed scores; every timeframe must be present
    pub fn from_map(scores: &HashMap<Timeframe, ScoreSet>) -> Result<Self, RatingError> {
        let take = |tf: Timeframe| {
            scores
                .get(&tf)
                .copied()
                .ok_or(RatingError::MissingTimeframe(tf))
        };
        Ok(Self::new(
            take(Timeframe::Daily)?,
            take(Timeframe::FourHour)?,
            take(Timeframe::Hourly)?,
        ))
    }

    pub fn get(&self, timeframe: Timeframe) -> &ScoreSet {
        match timeframe {
            Timeframe::Daily => &self.daily,
            Timeframe::FourHour => &self.four_hour,
            Timeframe::Hourly => &self.hourly,
        }
    }
}

/// Final rating of one asset for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReport {
    pub symbol: String,
    pub timeframes: TimeframeScores,
    pub blended: ScoreSet,
    pub overall_rating: f64,
    pub confidence: u8,
}

impl AssetReport {
    pub fn to_row(&self) -> RatingRow {
        RatingRow {
            symbol: self.symbol.clone(),
            overall_rating: self.overall_rating,
            confidence: self.confidence,
            scores: self.blended,
        }
    }
}

/// One line of the rating table: symbol, rating, confidence and the blended
/// `{key}_score` columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub symbol: String,
    pub overall_rating: f64,
    pub confidence: u8,
    pub scores: ScoreSet,
}

impl RatingRow {
    pub fn header() -> Vec<String> {
        let mut columns = vec![
            "symbol".to_string(),
            "overall_rating".to_string(),
            "confidence".to_string(),
        ];
        columns.extend(ScoreKey::ALL.iter().map(ScoreKey::column));
        columns
    }

    pub fn score(&self, kind: IndicatorKind) -> f64 {
        self.scores.indicator(kind)
    }
}

/// Rating table handed to the CSV exporter and the HTTP API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingTable {
    pub vs_currency: String,
    pub generated_at: Option<DateTime<Utc>>,
    pub rows: Vec<RatingRow>,
}

impl RatingTable {
    pub fn new(vs_currency: impl Into<String>, reports: &[AssetReport]) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            generated_at: Some(Utc::now()),
            rows: reports.iter().map(AssetReport::to_row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, symbol: &str) -> Option<&RatingRow> {
        self.rows
            .iter()
            .find(|row| row.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Rows ordered by overall rating, best first
    pub fn sorted_by_rating(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.overall_rating.total_cmp(&a.overall_rating));
        Self {
            vs_currency: self.vs_currency.clone(),
            generated_at: self.generated_at,
            rows,
        }
    }
}
