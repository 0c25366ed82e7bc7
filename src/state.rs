use std::sync::Arc;

use crate::provider::{MarketDataProvider, YahooProvider};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
}

impl AppState {
    /// State backed by the real Yahoo Finance provider.
    pub fn new() -> Self {
        Self {
            provider: Arc::new(YahooProvider::new()),
        }
    }

    /// State backed by an arbitrary provider, used by tests.
    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
