//! Momentum indicators: MACD, RSI, Awesome Oscillator, CCI, Williams %R

pub mod awesome_oscillator;
pub mod cci;
pub mod macd;
pub mod rsi;
pub mod williams_r;

pub use awesome_oscillator::*;
pub use cci::*;
pub use macd::*;
pub use rsi::*;
pub use williams_r::*;
