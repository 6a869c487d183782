//! Normalized 0-100 score sets

use crate::indicators::registry::IndicatorKind;
use serde::{Deserialize, Serialize};

/// Every key carried by a [`ScoreSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKey {
    Indicator(IndicatorKind),
    Confidence,
}

impl ScoreKey {
    pub const ALL: [ScoreKey; 9] = [
        ScoreKey::Indicator(IndicatorKind::Macd),
        ScoreKey::Indicator(IndicatorKind::Adx),
        ScoreKey::Indicator(IndicatorKind::MaCross),
        ScoreKey::Indicator(IndicatorKind::Ao),
        ScoreKey::Indicator(IndicatorKind::Rsi),
        ScoreKey::Indicator(IndicatorKind::Cci),
        ScoreKey::Indicator(IndicatorKind::WilliamsR),
        ScoreKey::Indicator(IndicatorKind::SwingIndex),
        ScoreKey::Confidence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScoreKey::Indicator(kind) => kind.key(),
            ScoreKey::Confidence => "confidence",
        }
    }

    /// Column name used in the exported rating table
    pub fn column(&self) -> String {
        format!("{}_score", self.name())
    }
}

impl From<IndicatorKind> for ScoreKey {
    fn from(kind: IndicatorKind) -> Self {
        ScoreKey::Indicator(kind)
    }
}

/// Scores for one (asset, timeframe) pair, or the blend of three of them.
///
/// Indicator scores are real-valued in [0, 100]. `confidence` is an integer
/// in [0, 100] for a single timeframe and the weighted average of those
/// integers once blended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub macd: f64,
    pub adx: f64,
    pub ma_cross: f64,
    pub ao: f64,
    pub rsi: f64,
    pub cci: f64,
    pub williams_r: f64,
    pub swing_index: f64,
    pub confidence: f64,
}

impl ScoreSet {
    /// Every key set to `value`
    pub fn uniform(value: f64) -> Self {
        Self {
            macd: value,
            adx: value,
            ma_cross: value,
            ao: value,
            rsi: value,
            cci: value,
            williams_r: value,
            swing_index: value,
            confidence: value,
        }
    }

    pub fn get(&self, key: ScoreKey) -> f64 {
        match key {
            ScoreKey::Indicator(kind) => self.indicator(kind),
            ScoreKey::Confidence => self.confidence,
        }
    }

    pub fn set(&mut self, key: ScoreKey, value: f64) {
        let slot = match key {
            ScoreKey::Indicator(IndicatorKind::Macd) => &mut self.macd,
            ScoreKey::Indicator(IndicatorKind::Adx) => &mut self.adx,
            ScoreKey::Indicator(IndicatorKind::MaCross) => &mut self.ma_cross,
            ScoreKey::Indicator(IndicatorKind::Ao) => &mut self.ao,
            ScoreKey::Indicator(IndicatorKind::Rsi) => &mut self.rsi,
            ScoreKey::Indicator(IndicatorKind::Cci) => &mut self.cci,
            ScoreKey::Indicator(IndicatorKind::WilliamsR) => &mut self.williams_r,
            ScoreKey::Indicator(IndicatorKind::SwingIndex) => &mut self.swing_index,
            ScoreKey::Confidence => &mut self.confidence,
        };
        *slot = value;
    }

    pub fn indicator(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::Macd => self.macd,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::MaCross => self.ma_cross,
            IndicatorKind::Ao => self.ao,
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Cci => self.cci,
            IndicatorKind::WilliamsR => self.williams_r,
            IndicatorKind::SwingIndex => self.swing_index,
        }
    }

    /// The eight indicator scores, confidence excluded
    pub fn indicator_scores(&self) -> impl Iterator<Item = (IndicatorKind, f64)> + '_ {
        IndicatorKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.indicator(kind)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreKey, f64)> + '_ {
        ScoreKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
