//! Quote assembly from raw close samples.

use crate::models::QuoteRecord;

/// Build a quote record from one day of minute close samples.
///
/// The last sample is the latest price and the second-to-last the previous
/// close; a single-sample day reuses the latest price as previous close.
/// Percent change is zero when the previous close is zero.
pub fn build_quote(ticker: &str, closes: &[f64]) -> QuoteRecord {
    let Some(&latest) = closes.last() else {
        return QuoteRecord::Unavailable {
            stock: ticker.to_string(),
            error: "No data available".to_string(),
        };
    };

    let previous = if closes.len() > 1 {
        closes[closes.len() - 2]
    } else {
        latest
    };

    let change_percent = if previous != 0.0 {
        (latest - previous) / previous * 100.0
    } else {
        0.0
    };

    QuoteRecord::Quote {
        stock: ticker.to_string(),
        latest_price: format!("${latest:.2}"),
        change: format!("{change_percent:.2}%"),
        previous_close: format!("${previous:.2}"),
    }
}
