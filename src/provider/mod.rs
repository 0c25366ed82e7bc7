//! External market-data source abstraction.
//!
//! Handlers talk to a [`MarketDataProvider`] trait object so tests can swap
//! the real Yahoo Finance client for a canned one.

use async_trait::async_trait;
use thiserror::Error;

mod yahoo;

pub use yahoo::YahooProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("provider error: {0}")]
    Upstream(String),
}

/// A daily close sample with its label already rendered for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyClose {
    /// Month-day label in the exchange's local time, e.g. `"03-17"`.
    pub label: String,
    pub close: f64,
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// One day of minute-granularity closes, pre/post-market included.
    ///
    /// An unknown symbol yields an empty vector, not an error.
    async fn intraday_closes(&self, ticker: &str) -> Result<Vec<f64>, ProviderError>;

    /// One month of daily closes in chronological order.
    async fn daily_closes(&self, ticker: &str) -> Result<Vec<DailyClose>, ProviderError>;
}
