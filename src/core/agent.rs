//! Rating agent: rank → fetch → score → table

use crate::config::AppConfig;
use crate::error::RatingError;
use crate::metrics::Metrics;
use crate::models::indicators::Candle;
use crate::models::report::{AssetListing, AssetReport, RatingTable};
use crate::models::timeframe::Timeframe;
use crate::services::{
    AssetSource, BinanceClient, CandleProvider, CoinGeckoClient, FallbackCandleProvider,
};
use crate::signals::engine::{RatingEngine, TimeframeCandles, MIN_CANDLES};
use futures_util::future::join3;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Fetch and skip policy of one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSettings {
    pub lookback_days: u32,
    pub min_candles: usize,
    pub concurrency: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            lookback_days: 90,
            min_candles: MIN_CANDLES,
            concurrency: 4,
        }
    }
}

impl From<&AppConfig> for AgentSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            lookback_days: config.lookback_days,
            min_candles: config.min_candles,
            concurrency: config.concurrency.max(1),
        }
    }
}

/// Why an asset was left out of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unavailable(Timeframe),
    InsufficientHistory {
        timeframe: Timeframe,
        available: usize,
    },
}

pub struct RatingAgent {
    assets: Arc<dyn AssetSource + Send + Sync>,
    candles: Arc<dyn CandleProvider + Send + Sync>,
    engine: RatingEngine,
    settings: AgentSettings,
    metrics: Option<Arc<Metrics>>,
}

impl RatingAgent {
    pub fn new(
        assets: Arc<dyn AssetSource + Send + Sync>,
        candles: Arc<dyn CandleProvider + Send + Sync>,
        engine: RatingEngine,
    ) -> Self {
        Self {
            assets,
            candles,
            engine,
            settings: AgentSettings::default(),
            metrics: None,
        }
    }

    /// Binance with CoinGecko fallback for candles, CoinGecko for the ranking
    pub fn from_config(config: &AppConfig) -> Result<Self, RatingError> {
        let engine = RatingEngine::new(config.scoring_config()?)?;
        let coingecko = Arc::new(CoinGeckoClient::new(config.coingecko_base_url.clone()));
        let binance = Arc::new(BinanceClient::new(config.binance_base_url.clone()));
        let candles = Arc::new(FallbackCandleProvider::new(binance, coingecko.clone()));

        Ok(Self::new(coingecko, candles, engine).with_settings(AgentSettings::from(config)))
    }

    pub fn with_settings(mut self, settings: AgentSettings) -> Self {
        self.settings = AgentSettings {
            concurrency: settings.concurrency.max(1),
            ..settings
        };
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    pub fn settings(&self) -> AgentSettings {
        self.settings
    }

    fn check_series(
        &self,
        timeframe: Timeframe,
        series: Option<Vec<Candle>>,
    ) -> Result<Vec<Candle>, SkipReason> {
        let series = series.ok_or(SkipReason::Unavailable(timeframe))?;
        if series.len() < self.settings.min_candles {
            return Err(SkipReason::InsufficientHistory {
                timeframe,
                available: series.len(),
            });
        }
        Ok(series)
    }

    /// Fetch the three timeframes of one asset concurrently
    pub async fn collect_candles(
        &self,
        asset: &AssetListing,
    ) -> Result<TimeframeCandles, SkipReason> {
        let lookback = self.settings.lookback_days;
        let (daily, four_hour, hourly) = join3(
            self.candles
                .fetch_candles(asset, Timeframe::Daily, lookback),
            self.candles
                .fetch_candles(asset, Timeframe::FourHour, lookback),
            self.candles
                .fetch_candles(asset, Timeframe::Hourly, lookback),
        )
        .await;

        Ok(TimeframeCandles {
            daily: self.check_series(Timeframe::Daily, daily)?,
            four_hour: self.check_series(Timeframe::FourHour, four_hour)?,
            hourly: self.check_series(Timeframe::Hourly, hourly)?,
        })
    }

    /// Rate one asset, or `None` when it has to be skipped
    pub async fn rate_asset(&self, asset: &AssetListing) -> Option<AssetReport> {
        match self.collect_candles(asset).await {
            Ok(candles) => {
                let report = self.engine.rate_asset(&asset.symbol, &candles);
                info!(
                    symbol = %report.symbol,
                    overall_rating = report.overall_rating,
                    confidence = report.confidence,
                    "Rated asset"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.assets_scored_total.inc();
                }
                Some(report)
            }
            Err(reason) => {
                match reason {
                    SkipReason::Unavailable(timeframe) => {
                        warn!(symbol = %asset.symbol, timeframe = %timeframe, "Skipping asset: no candle data");
                    }
                    SkipReason::InsufficientHistory {
                        timeframe,
                        available,
                    } => {
                        warn!(
                            symbol = %asset.symbol,
                            timeframe = %timeframe,
                            available,
                            required = self.settings.min_candles,
                            "Skipping asset: insufficient candle history"
                        );
                    }
                }
                if let Some(metrics) = &self.metrics {
                    metrics.assets_skipped_total.inc();
                }
                None
            }
        }
    }

    /// Rate the given assets; rows keep the order of `assets`
    pub async fn rate_assets(&self, vs_currency: &str, assets: &[AssetListing]) -> RatingTable {
        // Futures own their listing; borrowing from `assets` makes the handler future non-Send
        let results: Vec<Option<(usize, AssetReport)>> =
            stream::iter(assets.iter().cloned().enumerate())
                .map(|(index, asset)| async move {
                    self.rate_asset(&asset).await.map(|r| (index, r))
                })
                .buffer_unordered(self.settings.concurrency)
                .collect()
                .await;

        let mut rated: Vec<(usize, AssetReport)> = results.into_iter().flatten().collect();
        rated.sort_by_key(|(index, _)| *index);

        let reports: Vec<AssetReport> = rated.into_iter().map(|(_, report)| report).collect();
        RatingTable::new(vs_currency, &reports)
    }

    /// Full run over the top `top_n` assets by market cap
    pub async fn run(&self, vs_currency: &str, top_n: usize) -> Result<RatingTable, RatingError> {
        let started = Instant::now();
        let assets = self.assets.top_assets(vs_currency, top_n).await?;
        info!(
            count = assets.len(),
            vs_currency,
            "Rating top {} assets",
            assets.len()
        );

        let table = self.rate_assets(vs_currency, &assets).await;

        let elapsed = started.elapsed();
        if let Some(metrics) = &self.metrics {
            metrics
                .rating_run_duration_seconds
                .observe(elapsed.as_secs_f64());
        }
        info!(
            rated = table.len(),
            skipped = assets.len() - table.len(),
            duration_ms = elapsed.as_millis() as u64,
            "Rating run complete"
        );
        Ok(table)
    }
}
