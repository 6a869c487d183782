//! Indicator frame: every indicator computed over one candle series

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::momentum::{
    calculate_awesome_oscillator, calculate_cci, calculate_macd_histogram, calculate_rsi,
    calculate_williams_r,
};
use crate::indicators::registry::IndicatorKind;
use crate::indicators::structure::calculate_swing_index;
use crate::indicators::trend::{calculate_adx, calculate_ma_cross};
use crate::indicators::volatility::calculate_stability;
use crate::models::indicators::{Candle, IndicatorSnapshot};

/// Parallel indicator columns, one value per candle (NaN when undefined)
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub macd_histogram: Vec<f64>,
    pub adx: Vec<f64>,
    pub ma_cross: Vec<f64>,
    pub ao: Vec<f64>,
    pub rsi: Vec<f64>,
    pub cci: Vec<f64>,
    pub williams_r: Vec<f64>,
    pub swing_index: Vec<f64>,
    pub stability: Vec<f64>,
}

impl IndicatorFrame {
    pub fn compute(candles: &[Candle], params: &IndicatorParams) -> Self {
        Self {
            macd_histogram: calculate_macd_histogram(
                candles,
                params.macd_fast,
                params.macd_slow,
                params.macd_signal,
            ),
            adx: calculate_adx(candles, params.adx_period),
            ma_cross: calculate_ma_cross(candles, params.ma_fast, params.ma_slow),
            ao: calculate_awesome_oscillator(candles, params.ao_fast, params.ao_slow),
            rsi: calculate_rsi(candles, params.rsi_period),
            cci: calculate_cci(candles, params.cci_period),
            williams_r: calculate_williams_r(candles, params.williams_period),
            swing_index: calculate_swing_index(candles),
            stability: calculate_stability(candles, params.stability_window),
        }
    }

    pub fn len(&self) -> usize {
        self.swing_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swing_index.is_empty()
    }

    pub fn column(&self, kind: IndicatorKind) -> &[f64] {
        match kind {
            IndicatorKind::Macd => &self.macd_histogram,
            IndicatorKind::Adx => &self.adx,
            IndicatorKind::MaCross => &self.ma_cross,
            IndicatorKind::Ao => &self.ao,
            IndicatorKind::Rsi => &self.rsi,
            IndicatorKind::Cci => &self.cci,
            IndicatorKind::WilliamsR => &self.williams_r,
            IndicatorKind::SwingIndex => &self.swing_index,
        }
    }

    /// Values at the most recent candle
    pub fn latest(&self) -> IndicatorSnapshot {
        let last = |column: &[f64]| column.last().copied().and_then(math::defined);
        IndicatorSnapshot {
            macd_histogram: last(&self.macd_histogram),
            adx: last(&self.adx),
            ma_cross: last(&self.ma_cross),
            ao: last(&self.ao),
            rsi: last(&self.rsi),
            cci: last(&self.cci),
            williams_r: last(&self.williams_r),
            swing_index: last(&self.swing_index),
            stability: last(&self.stability),
        }
    }
}

impl IndicatorSnapshot {
    pub fn value(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::Macd => self.macd_histogram,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::MaCross => self.ma_cross,
            IndicatorKind::Ao => self.ao,
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Cci => self.cci,
            IndicatorKind::WilliamsR => self.williams_r,
            IndicatorKind::SwingIndex => self.swing_index,
        }
    }
}

/// Compute the frame and keep only its last row
pub fn latest_indicators(candles: &[Candle], params: &IndicatorParams) -> IndicatorSnapshot {
    IndicatorFrame::compute(candles, params).latest()
}
