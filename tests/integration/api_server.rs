//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics and the rating table.

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum_test::TestServer;
use serde_json::Value;
use trendrater::config::AppConfig;
use trendrater::core::agent::RatingAgent;
use trendrater::core::http::{create_router, AppState};
use trendrater::metrics::Metrics;
use trendrater::models::report::{AssetReport, RatingTable, TimeframeScores};
use trendrater::models::score::ScoreSet;
use wiremock::MockServer;

use crate::test_utils::{mock_three_assets, mocked_agent};

/// Test helper for API server integration tests
#[allow(dead_code)]
struct TestApiServer {
    server: TestServer,
    state: AppState,
}

impl TestApiServer {
    fn new(agent: Option<RatingAgent>) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let config = AppConfig {
            vs_currency: "chf".to_string(),
            ..AppConfig::default()
        };
        let agent = agent.map(|a| Arc::new(a.with_metrics(metrics.clone())));
        let state = AppState::new(metrics, agent, &config);

        let server = TestServer::new(create_router(state.clone())).expect("start test server");
        Self { server, state }
    }

    async fn seed(&self, reports: &[AssetReport]) {
        *self.state.ratings.write().await = RatingTable::new("chf", reports);
    }
}

fn report(symbol: &str, overall: f64) -> AssetReport {
    let blended = ScoreSet::uniform(overall);
    AssetReport {
        symbol: symbol.to_string(),
        timeframes: TimeframeScores::new(blended, blended, blended),
        blended,
        overall_rating: overall,
        confidence: overall.round() as u8,
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new(None);
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "trendrater");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new(None);
    for _ in 0..3 {
        let _ = app.server.get("/health").await;
    }

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for name in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
        "assets_scored_total",
        "assets_skipped_total",
        "rating_run_duration_seconds",
    ] {
        assert!(body.contains(name), "Expected {} metric", name);
    }
    assert!(body.contains("http_requests_total 3"));
}

#[tokio::test]
async fn ratings_empty_before_first_run() {
    let app = TestApiServer::new(None);
    let response = app.server.get("/api/ratings").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["vs_currency"], "chf");
    assert!(body["generated_at"].is_null());
    assert_eq!(body["rows"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn ratings_sorted_best_first() {
    let app = TestApiServer::new(None);
    app.seed(&[report("ETH", 40.0), report("BTC", 72.5), report("SOL", 55.0)])
        .await;

    let body: Value = app.server.get("/api/ratings").await.json();
    let symbols: Vec<&str> = body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["BTC", "SOL", "ETH"]);
    assert!(body["generated_at"].is_string());
}

#[tokio::test]
async fn single_rating_lookup() {
    let app = TestApiServer::new(None);
    app.seed(&[report("BTC", 72.5)]).await;

    let response = app.server.get("/api/ratings/btc").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["symbol"], "BTC");
    assert_eq!(body["overall_rating"], 72.5);
    assert_eq!(body["scores"]["macd"], 72.5);

    let missing = app.server.get("/api/ratings/XRP").expect_failure().await;
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn ratings_csv_download() {
    let app = TestApiServer::new(None);
    app.seed(&[report("ETH", 40.0), report("BTC", 72.5)]).await;

    let response = app.server.get("/api/ratings.csv").await;
    assert_eq!(response.status_code(), 200);
    let content_type = response.header(CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/csv"));

    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("symbol,overall_rating,confidence,macd_score"));
    assert!(lines[1].starts_with("BTC,72.5,"));
    assert!(lines[2].starts_with("ETH,40,"));
}

#[tokio::test]
async fn indicator_catalogue_lists_bounds() {
    let app = TestApiServer::new(None);
    let body: Value = app.server.get("/api/indicators").await.json();
    let indicators = body.as_array().unwrap();
    assert_eq!(indicators.len(), 8);

    let rsi = indicators.iter().find(|i| i["key"] == "rsi").unwrap();
    assert_eq!(rsi["category"], "momentum");
    assert_eq!(rsi["min_candles"], 15);
    assert_eq!(rsi["lo"], 30.0);
    assert_eq!(rsi["hi"], 70.0);
}

#[tokio::test]
async fn refresh_without_agent_is_unavailable() {
    let app = TestApiServer::new(None);
    let response = app.server.post("/api/ratings/refresh").expect_failure().await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn refresh_replaces_cached_table() {
    let upstream = MockServer::start().await;
    mock_three_assets(&upstream).await;

    let app = TestApiServer::new(Some(mocked_agent(&upstream)));
    app.seed(&[report("OLD", 10.0)]).await;

    let response = app
        .server
        .post("/api/ratings/refresh")
        .add_query_param("vs_currency", "USD")
        .await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["rows"], 2);
    assert_eq!(body["vs_currency"], "usd");

    let table: Value = app.server.get("/api/ratings").await.json();
    assert_eq!(table["vs_currency"], "usd");
    let rows = table["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["symbol"] != "OLD"));
    assert_eq!(rows[0]["symbol"], "BTC");

    let metrics = app.server.get("/metrics").await.text();
    assert!(metrics.contains("assets_scored_total 2"));
}

#[tokio::test]
async fn refresh_upstream_failure_keeps_previous_table() {
    let upstream = MockServer::start().await;
    let app = TestApiServer::new(Some(mocked_agent(&upstream)));
    app.seed(&[report("OLD", 10.0)]).await;

    let response = app.server.post("/api/ratings/refresh").expect_failure().await;
    assert_eq!(response.status_code(), 502);

    let body: Value = app.server.get("/api/ratings/OLD").await.json();
    assert_eq!(body["symbol"], "OLD");
}
