//! Market data provider interfaces.

use crate::error::ProviderError;
use crate::models::indicators::Candle;
use crate::models::report::AssetListing;
use crate::models::timeframe::Timeframe;
use async_trait::async_trait;

/// Supplies the candle series of one asset at one timeframe.
///
/// `None` means no data: implementations own their own fallback and log
/// their failures; callers never retry.
#[async_trait]
pub trait CandleProvider {
    async fn fetch_candles(
        &self,
        asset: &AssetListing,
        timeframe: Timeframe,
        lookback_days: u32,
    ) -> Option<Vec<Candle>>;
}

/// Supplies the assets to rate, largest market cap first
#[async_trait]
pub trait AssetSource {
    async fn top_assets(
        &self,
        vs_currency: &str,
        limit: usize,
    ) -> Result<Vec<AssetListing>, ProviderError>;
}

/// Order candles by timestamp and drop duplicate timestamps (the later one
/// wins)
pub fn into_series(mut candles: Vec<Candle>) -> Vec<Candle> {
    candles.reverse();
    // stable sort keeps the later duplicate first, dedup keeps the first
    candles.sort_by_key(|c| c.timestamp);
    candles.dedup_by_key(|c| c.timestamp);
    candles
}
