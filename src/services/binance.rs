//! Binance spot klines (primary candle source)

use crate::error::ProviderError;
use crate::models::indicators::Candle;
use crate::models::report::AssetListing;
use crate::models::timeframe::Timeframe;
use crate::services::market_data::{into_series, CandleProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Largest page the klines endpoint serves
pub const MAX_KLINES: u32 = 1000;
const QUOTE_ASSET: &str = "USDT";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BinanceClient {
    base_url: String,
    client: reqwest::Client,
}

impl BinanceClient {
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

    /// `BTC` → `BTCUSDT`
    pub fn pair(symbol: &str) -> String {
        format!("{}{}", symbol.to_uppercase(), QUOTE_ASSET)
    }

    pub fn kline_limit(timeframe: Timeframe, lookback_days: u32) -> u32 {
        lookback_days
            .saturating_mul(timeframe.candles_per_day())
            .clamp(1, MAX_KLINES)
    }

    /// Latest klines up to now, oldest first
    pub async fn klines(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, ProviderError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let end_time = Utc::now().timestamp_millis();
        let limit = Self::kline_limit(timeframe, lookback_days);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", Self::pair(symbol)),
                ("interval", timeframe.as_str().to_string()),
                ("endTime", end_time.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                source_name: "binance",
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<Value> = response.json().await?;
        rows.iter().map(parse_kline).collect()
    }
}

/// Kline row: `[open_time_ms, "open", "high", "low", "close", "volume", ...]`
pub fn parse_kline(row: &Value) -> Result<Candle, ProviderError> {
    let fields = row
        .as_array()
        .ok_or_else(|| ProviderError::Parse(format!("kline is not an array: {}", row)))?;
    if fields.len() < 6 {
        return Err(ProviderError::Parse(format!(
            "kline has {} fields, expected at least 6",
            fields.len()
        )));
    }

    let open_time = fields[0]
        .as_i64()
        .ok_or_else(|| ProviderError::Parse(format!("invalid open time: {}", fields[0])))?;
    let timestamp = DateTime::from_timestamp_millis(open_time)
        .ok_or_else(|| ProviderError::Parse(format!("open time out of range: {}", open_time)))?;

    Ok(Candle::new(
        number(&fields[1], "open")?,
        number(&fields[2], "high")?,
        number(&fields[3], "low")?,
        number(&fields[4], "close")?,
        number(&fields[5], "volume")?,
        timestamp,
    ))
}

/// Binance sends prices as strings; accept plain numbers too
fn number(value: &Value, field: &str) -> Result<f64, ProviderError> {
    let parsed = match value {
        Value::String(s) => s.parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProviderError::Parse(format!("invalid {}: {}", field, value)))
}

#[async_trait]
impl CandleProvider for BinanceClient {
    async fn fetch_candles(
        &self,
        asset: &AssetListing,
        timeframe: Timeframe,
        lookback_days: u32,
    ) -> Option<Vec<Candle>> {
        match self.klines(&asset.symbol, timeframe, lookback_days).await {
            Ok(candles) if candles.is_empty() => {
                debug!(symbol = %asset.symbol, timeframe = %timeframe, "Binance returned no klines");
                None
            }
            Ok(candles) => {
                debug!(
                    symbol = %asset.symbol,
                    timeframe = %timeframe,
                    count = candles.len(),
                    "Fetched {} klines from Binance",
                    candles.len()
                );
                Some(into_series(candles))
            }
            Err(e) => {
                warn!(symbol = %asset.symbol, timeframe = %timeframe, error = %e, "Binance klines unavailable");
                None
            }
        }
    }
}
