//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{AppConfig, ScoringConfig};
use crate::core::agent::RatingAgent;
use crate::core::scheduler::RefreshScheduler;
use crate::export::to_csv_string;
use crate::indicators::registry::{IndicatorCategory, IndicatorKind};
use crate::metrics::Metrics;
use crate::models::report::{RatingRow, RatingTable};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub ratings: Arc<RwLock<RatingTable>>,
    pub agent: Option<Arc<RatingAgent>>,
    pub scoring: Arc<ScoringConfig>,
    pub vs_currency: String,
    pub top_n: usize,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, agent: Option<Arc<RatingAgent>>, config: &AppConfig) -> Self {
        let scoring = agent
            .as_ref()
            .map(|a| a.engine().config().clone())
            .unwrap_or_default();
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            ratings: Arc::new(RwLock::new(RatingTable {
                vs_currency: config.vs_currency.clone(),
                ..RatingTable::default()
            })),
            agent,
            scoring: Arc::new(scoring),
            vs_currency: config.vs_currency.clone(),
            top_n: config.top_n,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "trendrater"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Run the agent once and replace the cached table
pub async fn refresh_ratings(
    agent: &RatingAgent,
    ratings: &RwLock<RatingTable>,
    vs_currency: &str,
    top_n: usize,
) -> Result<usize, crate::error::RatingError> {
    let table = agent.run(vs_currency, top_n).await?;
    let rows = table.len();
    *ratings.write().await = table;
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RefreshQuery {
    vs_currency: Option<String>,
}

#[derive(Debug, Serialize)]
struct IndicatorInfo {
    key: &'static str,
    name: &'static str,
    category: IndicatorCategory,
    min_candles: usize,
    lo: f64,
    hi: f64,
}

/// Latest rating table, best overall rating first
async fn list_ratings(State(state): State<AppState>) -> Json<RatingTable> {
    let table = state.ratings.read().await;
    Json(table.sorted_by_rating())
}

async fn get_rating(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<RatingRow>, StatusCode> {
    let table = state.ratings.read().await;
    table
        .get(&symbol)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn ratings_csv(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let table = state.ratings.read().await.sorted_by_rating();
    let body = to_csv_string(&table).map_err(|e| {
        error!(error = %e, "Failed to render rating table as CSV");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response())
}

async fn trigger_refresh(
    State(state): State<AppState>,
    Query(params): Query<RefreshQuery>,
) -> Result<Json<Value>, StatusCode> {
    let agent = state
        .agent
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let vs_currency = params
        .vs_currency
        .map(|c| c.to_lowercase())
        .unwrap_or_else(|| state.vs_currency.clone());

    let rows = refresh_ratings(agent, &state.ratings, &vs_currency, state.top_n)
        .await
        .map_err(|e| {
            error!(error = %e, vs_currency = %vs_currency, "Rating refresh failed");
            StatusCode::BAD_GATEWAY
        })?;

    let generated_at = state.ratings.read().await.generated_at;
    Ok(Json(json!({
        "rows": rows,
        "vs_currency": vs_currency,
        "generated_at": generated_at,
    })))
}

/// Indicator catalogue with the active bounds and history requirements
async fn list_indicators(State(state): State<AppState>) -> Json<Vec<IndicatorInfo>> {
    let scoring = &state.scoring;
    let catalogue = IndicatorKind::ALL
        .iter()
        .map(|kind| {
            let bounds = scoring.bounds.get(*kind);
            IndicatorInfo {
                key: kind.key(),
                name: kind.name(),
                category: kind.category(),
                min_candles: kind.min_candles(&scoring.indicators),
                lo: bounds.lo,
                hi: bounds.hi,
            }
        })
        .collect();
    Json(catalogue)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/ratings", get(list_ratings))
        .route("/api/ratings.csv", get(ratings_csv))
        .route("/api/ratings/refresh", post(trigger_refresh))
        .route("/api/ratings/{symbol}", get(get_rating))
        .route("/api/indicators", get(list_indicators))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);

    // Without an agent the API still serves health, metrics and an empty table
    let agent = match RatingAgent::from_config(&config) {
        Ok(agent) => Some(Arc::new(agent.with_metrics(metrics.clone()))),
        Err(e) => {
            warn!(error = %e, "Rating agent unavailable - refresh endpoint disabled");
            None
        }
    };

    let state = AppState::new(metrics, agent.clone(), &config);

    let scheduler = match &agent {
        Some(agent) if config.refresh_interval_seconds > 0 => {
            let scheduler = RefreshScheduler::new(
                agent.clone(),
                state.ratings.clone(),
                state.vs_currency.clone(),
                state.top_n,
                config.refresh_interval_seconds,
            )?;
            scheduler.start().await;
            Some(scheduler)
        }
        _ => None,
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    let served = axum::serve(listener, app).await;

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }
    served?;

    Ok(())
}
