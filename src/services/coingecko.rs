//! CoinGecko: market-cap ranking and the price-only candle fallback

use crate::error::ProviderError;
use crate::models::indicators::Candle;
use crate::models::report::AssetListing;
use crate::models::timeframe::Timeframe;
use crate::services::market_data::{into_series, AssetSource, CandleProvider};
use async_trait::async_trait;
use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Quote currency of the fallback price history
pub const CHART_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
struct MarketEntry {
    id: String,
    symbol: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoClient {
    base_url: String,
    client: reqwest::Client,
}

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                source_name: "coingecko",
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Top `limit` coins by market cap, quoted in `vs_currency`
    pub async fn markets(
        &self,
        vs_currency: &str,
        limit: usize,
    ) -> Result<Vec<AssetListing>, ProviderError> {
        let entries: Vec<MarketEntry> = self
            .get_json(
                "/coins/markets",
                &[
                    ("vs_currency", vs_currency.to_lowercase()),
                    ("order", "market_cap_desc".to_string()),
                    ("per_page", limit.to_string()),
                    ("page", "1".to_string()),
                    ("sparkline", "false".to_string()),
                ],
            )
            .await?;

        Ok(entries
            .into_iter()
            .take(limit)
            .map(|e| AssetListing::new(e.symbol, e.id, e.name))
            .collect())
    }

    /// Price history turned into flat candles (open = high = low = close,
    /// volume 0)
    ///
    /// No `interval` is sent, so CoinGecko picks the granularity from `days`
    /// (hourly points up to 90 days, daily beyond).
    pub async fn price_history(
        &self,
        coin_id: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, ProviderError> {
        let chart: MarketChart = self
            .get_json(
                &format!("/coins/{}/market_chart", coin_id),
                &[
                    ("vs_currency", CHART_CURRENCY.to_string()),
                    ("days", lookback_days.to_string()),
                ],
            )
            .await?;

        chart
            .prices
            .into_iter()
            .map(|(ms, price)| {
                let timestamp = DateTime::from_timestamp_millis(ms as i64).ok_or_else(|| {
                    ProviderError::Parse(format!("price timestamp out of range: {}", ms))
                })?;
                if !price.is_finite() {
                    return Err(ProviderError::Parse(format!("invalid price: {}", price)));
                }
                Ok(Candle::flat(price, timestamp))
            })
            .collect()
    }
}

#[async_trait]
impl CandleProvider for CoinGeckoClient {
    /// The endpoint has no per-timeframe OHLC; every timeframe gets the same series
    async fn fetch_candles(
        &self,
        asset: &AssetListing,
        timeframe: Timeframe,
        lookback_days: u32,
    ) -> Option<Vec<Candle>> {
        match self.price_history(&asset.id, lookback_days).await {
            Ok(candles) if candles.is_empty() => {
                debug!(symbol = %asset.symbol, timeframe = %timeframe, "CoinGecko returned no prices");
                None
            }
            Ok(candles) => {
                debug!(
                    symbol = %asset.symbol,
                    timeframe = %timeframe,
                    count = candles.len(),
                    "Using CoinGecko price history"
                );
                Some(into_series(candles))
            }
            Err(e) => {
                warn!(symbol = %asset.symbol, timeframe = %timeframe, error = %e, "CoinGecko price history unavailable");
                None
            }
        }
    }
}

#[async_trait]
impl AssetSource for CoinGeckoClient {
    async fn top_assets(
        &self,
        vs_currency: &str,
        limit: usize,
    ) -> Result<Vec<AssetListing>, ProviderError> {
        let assets = self.markets(vs_currency, limit).await?;
        info!(count = assets.len(), vs_currency, "Fetched top assets by market cap");
        Ok(assets)
    }
}
