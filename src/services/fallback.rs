//! Primary/secondary candle provider chain

use crate::models::indicators::Candle;
use crate::models::report::AssetListing;
use crate::models::timeframe::Timeframe;
use crate::services::market_data::CandleProvider;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Asks `primary` first and `secondary` only when the primary has no data
pub struct FallbackCandleProvider {
    primary: Arc<dyn CandleProvider + Send + Sync>,
    secondary: Arc<dyn CandleProvider + Send + Sync>,
}

impl FallbackCandleProvider {
    pub fn new(
        primary: Arc<dyn CandleProvider + Send + Sync>,
        secondary: Arc<dyn CandleProvider + Send + Sync>,
    ) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl CandleProvider for FallbackCandleProvider {
    async fn fetch_candles(
        &self,
        asset: &AssetListing,
        timeframe: Timeframe,
        lookback_days: u32,
    ) -> Option<Vec<Candle>> {
        if let Some(candles) = self
            .primary
            .fetch_candles(asset, timeframe, lookback_days)
            .await
        {
            return Some(candles);
        }

        debug!(symbol = %asset.symbol, timeframe = %timeframe, "Falling back to secondary candle source");
        self.secondary
            .fetch_candles(asset, timeframe, lookback_days)
            .await
    }
}
