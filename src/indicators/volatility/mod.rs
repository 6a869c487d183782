//! Volatility measures: close-price stability

pub mod stability;

pub use stability::*;
