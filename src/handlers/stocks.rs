use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::AppError;
use crate::models::{ChartPoint, ChartResponse, QuoteRecord, TOP_10_STOCKS};
use crate::quote::build_quote;
use crate::state::AppState;

/// Fetch one quote record, folding provider failures into the payload.
async fn quote_for(state: &AppState, ticker: &str) -> QuoteRecord {
    match state.provider.intraday_closes(ticker).await {
        Ok(closes) => build_quote(ticker, &closes),
        Err(err) => {
            tracing::error!(%ticker, error = %err, "failed to fetch stock data");
            QuoteRecord::Unavailable {
                stock: ticker.to_string(),
                error: err.to_string(),
            }
        }
    }
}

pub async fn top10(State(state): State<AppState>) -> Json<Vec<QuoteRecord>> {
    let mut records = Vec::with_capacity(TOP_10_STOCKS.len());
    for ticker in TOP_10_STOCKS {
        records.push(quote_for(&state, ticker).await);
    }
    Json(records)
}

pub async fn by_ticker(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Json<QuoteRecord> {
    Json(quote_for(&state, &ticker.to_uppercase()).await)
}

pub async fn chart(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<ChartResponse>, AppError> {
    let ticker = ticker.to_uppercase();

    let closes = state.provider.daily_closes(&ticker).await.map_err(|err| {
        tracing::error!(%ticker, error = %err, "failed to fetch chart data");
        AppError::ChartFetch
    })?;

    if closes.is_empty() {
        return Err(AppError::ChartEmpty);
    }

    let chart = closes
        .into_iter()
        .map(|sample| ChartPoint {
            time: sample.label,
            price: (sample.close * 100.0).round() / 100.0,
        })
        .collect();

    Ok(Json(ChartResponse { chart }))
}
