use serde::Serialize;

/// The ten most traded symbols served by `/stocks/top10`, in response order.
pub const TOP_10_STOCKS: [&str; 10] = [
    "AAPL", "MSFT", "TSLA", "NVDA", "AMZN", "GOOGL", "META", "BRK-B", "NFLX", "AMD",
];

/// A single stock snapshot as the frontend consumes it.
///
/// Field names and the `$`/`%` string formatting are part of the wire
/// contract. A symbol the provider cannot resolve carries an error message
/// in place of its prices; the HTTP status stays 200 either way.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuoteRecord {
    Quote {
        #[serde(rename = "Stock")]
        stock: String,
        #[serde(rename = "Latest Price")]
        latest_price: String,
        #[serde(rename = "Change")]
        change: String,
        #[serde(rename = "Previous Close")]
        previous_close: String,
    },
    Unavailable {
        #[serde(rename = "Stock")]
        stock: String,
        #[serde(rename = "Error")]
        error: String,
    },
}

/// One daily close on the month chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// Month-day label, e.g. `"03-17"`.
    pub time: String,
    /// Closing price rounded to 2 decimals.
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub chart: Vec<ChartPoint>,
}
