//! Candle structure indicators: Swing Index proxy

pub mod swing_index;

pub use swing_index::*;
