//! Trend indicators: ADX, MA cross

pub mod adx;
pub mod ma_cross;

pub use adx::*;
pub use ma_cross::*;
