//! Multi-timeframe technical rating engine for the largest crypto assets.
//!
//! Candles from Binance (CoinGecko as fallback) run through eight
//! indicators per timeframe, are normalized to 0-100 scores, blended across
//! 1d/4h/1h and averaged into one overall rating per asset.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
