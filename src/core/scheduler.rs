//! Cron-based scheduler for periodic rating refreshes

use crate::core::agent::RatingAgent;
use crate::core::http::refresh_ratings;
use crate::error::ConfigError;
use crate::models::report::RatingTable;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Cron expression (with seconds) firing exactly every `interval_seconds`
///
/// Cron steps restart at every minute, hour and day boundary, so only
/// intervals dividing one of those evenly keep a constant gap. Anything
/// else is rejected instead of silently running at another cadence.
pub fn interval_to_cron(interval_seconds: u64) -> Result<String, ConfigError> {
    let unsupported = |reason: &str| ConfigError::Schedule {
        expr: format!("every {}s", interval_seconds),
        reason: reason.to_string(),
    };

    match interval_seconds {
        0 => Err(unsupported("interval is 0, refresh disabled")),
        s if s < 60 && 60 % s == 0 => Ok(format!("*/{} * * * * *", s)),
        s if s < 3600 && s % 60 == 0 && 3600 % s == 0 => Ok(format!("0 */{} * * * *", s / 60)),
        s if s < 86_400 && s % 3600 == 0 && 86_400 % s == 0 => {
            Ok(format!("0 0 */{} * * *", s / 3600))
        }
        86_400 => Ok("0 0 0 * * *".to_string()),
        _ => Err(unsupported(
            "interval must evenly divide a minute, an hour or a day",
        )),
    }
}

/// Periodically reruns the agent and replaces the shared rating table
pub struct RefreshScheduler {
    agent: Arc<RatingAgent>,
    ratings: Arc<RwLock<RatingTable>>,
    vs_currency: String,
    top_n: usize,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshScheduler {
    /// Rejects 0 (disabled) and intervals no cron step can express
    pub fn new(
        agent: Arc<RatingAgent>,
        ratings: Arc<RwLock<RatingTable>>,
        vs_currency: String,
        top_n: usize,
        interval_seconds: u64,
    ) -> Result<Self, ConfigError> {
        let cron_expr = interval_to_cron(interval_seconds)?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| ConfigError::Schedule {
            expr: cron_expr.clone(),
            reason: e.to_string(),
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "RefreshScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            agent,
            ratings,
            vs_currency,
            top_n,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn start(&self) {
        let agent = self.agent.clone();
        let ratings = self.ratings.clone();
        let vs_currency = self.vs_currency.clone();
        let top_n = self.top_n;
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("RefreshScheduler: started, waiting for cron schedule...");

            loop {
                match schedule.upcoming(chrono::Utc).next() {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let duration = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(duration).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                info!(vs_currency = %vs_currency, "RefreshScheduler: cron tick, refreshing ratings");
                match refresh_ratings(&agent, &ratings, &vs_currency, top_n).await {
                    Ok(rows) => info!(rows, "RefreshScheduler: rating table replaced"),
                    Err(e) => error!(error = %e, "RefreshScheduler: refresh failed, keeping previous table"),
                }
            }
        });

        *self.handle.write().await = Some(handle);
        info!("RefreshScheduler: started successfully");
    }

    pub async fn stop(&self) {
        if let Some(h) = self.handle.write().await.take() {
            h.abort();
            info!("RefreshScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
