//! Endpoint tests against the real router with a canned provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use stock_gateway::provider::{DailyClose, MarketDataProvider, ProviderError};
use stock_gateway::router::create_router;
use stock_gateway::state::AppState;

#[derive(Default)]
struct FakeProvider {
    intraday: HashMap<String, Vec<f64>>,
    daily: HashMap<String, Vec<DailyClose>>,
    fail: bool,
}

impl FakeProvider {
    fn with_intraday(ticker: &str, closes: Vec<f64>) -> Self {
        let mut provider = Self::default();
        provider.intraday.insert(ticker.to_string(), closes);
        provider
    }

    fn with_daily(ticker: &str, closes: Vec<DailyClose>) -> Self {
        let mut provider = Self::default();
        provider.daily.insert(ticker.to_string(), closes);
        provider
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    async fn intraday_closes(&self, ticker: &str) -> Result<Vec<f64>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Upstream("provider offline".to_string()));
        }
        Ok(self.intraday.get(ticker).cloned().unwrap_or_default())
    }

    async fn daily_closes(&self, ticker: &str) -> Result<Vec<DailyClose>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Upstream("provider offline".to_string()));
        }
        Ok(self.daily.get(ticker).cloned().unwrap_or_default())
    }
}

async fn get_json(provider: FakeProvider, uri: &str) -> (StatusCode, Value) {
    let app = create_router(AppState::with_provider(Arc::new(provider)));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_single_ticker_quote() {
    let provider = FakeProvider::with_intraday("AAPL", vec![98.0, 100.0, 102.5]);
    let (status, body) = get_json(provider, "/stock/AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Stock"], "AAPL");
    assert_eq!(body["Latest Price"], "$102.50");
    assert_eq!(body["Previous Close"], "$100.00");
    assert_eq!(body["Change"], "2.50%");
}

#[tokio::test]
async fn test_ticker_path_is_uppercased() {
    let provider = FakeProvider::with_intraday("AAPL", vec![100.0, 101.0]);
    let (_, lower) = get_json(provider, "/stock/aapl").await;

    let provider = FakeProvider::with_intraday("AAPL", vec![100.0, 101.0]);
    let (_, upper) = get_json(provider, "/stock/AAPL").await;

    assert_eq!(lower, upper);
    assert_eq!(lower["Stock"], "AAPL");
}

#[tokio::test]
async fn test_unknown_ticker_embeds_error_with_200() {
    let (status, body) = get_json(FakeProvider::default(), "/stock/zzzz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Stock"], "ZZZZ");
    assert_eq!(body["Error"], "No data available");
    assert!(body.get("Latest Price").is_none());
}

#[tokio::test]
async fn test_provider_failure_embeds_error_with_200() {
    let (status, body) = get_json(FakeProvider::failing(), "/stock/AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Stock"], "AAPL");
    assert_eq!(body["Error"], "provider error: provider offline");
}

#[tokio::test]
async fn test_top10_returns_all_symbols_in_order() {
    let provider = FakeProvider::with_intraday("MSFT", vec![400.0, 404.0]);
    let (status, body) = get_json(provider, "/stocks/top10").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 10);

    let symbols: Vec<&str> = records
        .iter()
        .map(|r| r["Stock"].as_str().unwrap())
        .collect();
    assert_eq!(
        symbols,
        vec!["AAPL", "MSFT", "TSLA", "NVDA", "AMZN", "GOOGL", "META", "BRK-B", "NFLX", "AMD"]
    );

    // Only MSFT has data; every other record carries its own error.
    assert_eq!(records[1]["Change"], "1.00%");
    assert_eq!(records[0]["Error"], "No data available");
    assert_eq!(records[9]["Error"], "No data available");
}

#[tokio::test]
async fn test_chart_returns_rounded_points() {
    let provider = FakeProvider::with_daily(
        "NVDA",
        vec![
            DailyClose {
                label: "03-03".to_string(),
                close: 120.456,
            },
            DailyClose {
                label: "03-04".to_string(),
                close: 121.0,
            },
        ],
    );
    let (status, body) = get_json(provider, "/stock/nvda/chart").await;

    assert_eq!(status, StatusCode::OK);
    let chart = body["chart"].as_array().unwrap();
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0]["time"], "03-03");
    assert_eq!(chart[0]["price"], 120.46);
    assert_eq!(chart[1]["time"], "03-04");
    assert_eq!(chart[1]["price"], 121.0);
}

#[tokio::test]
async fn test_chart_empty_history_is_404() {
    let (status, body) = get_json(FakeProvider::default(), "/stock/ZZZZ/chart").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "No chart data available"}));
}

#[tokio::test]
async fn test_chart_provider_failure_is_500() {
    let (status, body) = get_json(FakeProvider::failing(), "/stock/AAPL/chart").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Failed to fetch chart data"}));
}
