//! Stock Quote Gateway
//!
//! A thin HTTP service that proxies stock-price data from Yahoo Finance
//! to a frontend:
//! - `GET /stocks/top10` — snapshot of the ten most traded symbols
//! - `GET /stock/{ticker}` — snapshot for a single symbol
//! - `GET /stock/{ticker}/chart` — one month of daily closes for charting
//!
//! Every request hits the upstream provider directly; there is no cache,
//! no retry and no shared state beyond the HTTP client.

pub mod error;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod quote;
pub mod router;
pub mod state;
