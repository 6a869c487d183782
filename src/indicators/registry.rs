//! Indicator registry: the fixed indicator set and its history requirements

use crate::config::IndicatorParams;
use serde::{Deserialize, Serialize};

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Structure,
}

/// The eight scored indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Macd,
    Adx,
    MaCross,
    Ao,
    Rsi,
    Cci,
    WilliamsR,
    SwingIndex,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 8] = [
        IndicatorKind::Macd,
        IndicatorKind::Adx,
        IndicatorKind::MaCross,
        IndicatorKind::Ao,
        IndicatorKind::Rsi,
        IndicatorKind::Cci,
        IndicatorKind::WilliamsR,
        IndicatorKind::SwingIndex,
    ];

    /// Key used in score sets and report columns
    pub fn key(&self) -> &'static str {
        match self {
            IndicatorKind::Macd => "macd",
            IndicatorKind::Adx => "adx",
            IndicatorKind::MaCross => "ma_cross",
            IndicatorKind::Ao => "ao",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Cci => "cci",
            IndicatorKind::WilliamsR => "williams_r",
            IndicatorKind::SwingIndex => "swing_index",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Macd => "MACD histogram",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::MaCross => "MA cross",
            IndicatorKind::Ao => "Awesome Oscillator",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Cci => "CCI",
            IndicatorKind::WilliamsR => "Williams %R",
            IndicatorKind::SwingIndex => "Swing Index (single-candle proxy)",
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Macd
            | IndicatorKind::Ao
            | IndicatorKind::Rsi
            | IndicatorKind::Cci
            | IndicatorKind::WilliamsR => IndicatorCategory::Momentum,
            IndicatorKind::Adx | IndicatorKind::MaCross => IndicatorCategory::Trend,
            IndicatorKind::SwingIndex => IndicatorCategory::Structure,
        }
    }

    /// Candles needed before the latest value is defined
    pub fn min_candles(&self, params: &IndicatorParams) -> usize {
        match self {
            IndicatorKind::Macd => {
                (params.macd_fast.max(params.macd_slow) + params.macd_signal).saturating_sub(1)
            }
            IndicatorKind::Adx => 2 * params.adx_period,
            IndicatorKind::MaCross => params.ma_fast.max(params.ma_slow),
            IndicatorKind::Ao => params.ao_fast.max(params.ao_slow),
            IndicatorKind::Rsi => params.rsi_period + 1,
            IndicatorKind::Cci => params.cci_period,
            IndicatorKind::WilliamsR => params.williams_period,
            IndicatorKind::SwingIndex => 1,
        }
    }
}

/// Candles needed before close-price stability is defined
pub fn stability_min_candles(params: &IndicatorParams) -> usize {
    params.stability_window + 1
}

/// Indicators a series is too short for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingHistory {
    pub indicator: IndicatorKind,
    pub required: usize,
}

/// Result of checking one series length against every indicator's window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryCheck {
    pub available: usize,
    pub missing: Vec<MissingHistory>,
    pub stability_defined: bool,
}

impl HistoryCheck {
    pub fn evaluate(available: usize, params: &IndicatorParams) -> Self {
        let missing = IndicatorKind::ALL
            .iter()
            .filter_map(|kind| {
                let required = kind.min_candles(params);
                (available < required).then_some(MissingHistory {
                    indicator: *kind,
                    required,
                })
            })
            .collect();

        Self {
            available,
            missing,
            stability_defined: available >= stability_min_candles(params),
        }
    }

    /// Every indicator and the stability measure will be defined
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.stability_defined
    }

    pub fn is_missing(&self, kind: IndicatorKind) -> bool {
        self.missing.iter().any(|m| m.indicator == kind)
    }

    /// Longest window across all indicators and the stability measure
    pub fn required_for_all(params: &IndicatorParams) -> usize {
        IndicatorKind::ALL
            .iter()
            .map(|kind| kind.min_candles(params))
            .chain(std::iter::once(stability_min_candles(params)))
            .max()
            .unwrap_or(0)
    }
}
