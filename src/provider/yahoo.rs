//! Yahoo Finance v8 chart API client.
//!
//! Both endpoints of this service are backed by the same upstream call:
//! `GET {base}/v8/finance/chart/{ticker}` with a range/interval pair.
//! Quotes use `1d`/`1m` with pre/post-market samples, charts `1mo`/`1d`.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use reqwest::Client;
use serde::Deserialize;

use super::{DailyClose, MarketDataProvider, ProviderError};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn fetch_chart(
        &self,
        ticker: &str,
        range: &str,
        interval: &str,
        prepost: bool,
    ) -> Result<ChartResult, ProviderError> {
        let mut url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.base_url, ticker, range, interval
        );
        if prepost {
            url.push_str("&includePrePost=true");
        }

        let res = self.client.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(ProviderError::Status(res.status()));
        }

        let envelope = res.json::<ChartEnvelope>().await?;
        if let Some(err) = envelope.chart.error {
            return Err(ProviderError::Upstream(err.description));
        }

        // An absent result set means "no data for this symbol", not a failure.
        Ok(envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .unwrap_or_default())
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn intraday_closes(&self, ticker: &str) -> Result<Vec<f64>, ProviderError> {
        let result = self.fetch_chart(ticker, "1d", "1m", true).await?;
        Ok(result.closes().map(|(_, close)| close).collect())
    }

    async fn daily_closes(&self, ticker: &str) -> Result<Vec<DailyClose>, ProviderError> {
        let result = self.fetch_chart(ticker, "1mo", "1d", false).await?;
        let offset = result.meta.exchange_offset();

        Ok(result
            .closes()
            .map(|(ts, close)| DailyClose {
                label: format_label(ts, offset),
                close,
            })
            .collect())
    }
}

fn format_label(ts: i64, offset: FixedOffset) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.with_timezone(&offset).format("%m-%d").to_string())
        .unwrap_or_default()
}

/* ---------- Wire format ---------- */

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    #[serde(default)]
    gmtoffset: i32,
}

impl Meta {
    fn exchange_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.gmtoffset).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl ChartResult {
    /// Timestamp/close pairs with null closes (minutes with no trades) dropped.
    fn closes(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        let closes = self
            .indicators
            .quote
            .first()
            .map(|q| q.close.as_slice())
            .unwrap_or(&[]);

        self.timestamp
            .iter()
            .zip(closes)
            .filter_map(|(&ts, &close)| close.map(|c| (ts, c)))
    }
}
