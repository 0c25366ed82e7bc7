use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::stocks;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stocks/top10", get(stocks::top10))
        .route("/stock/{ticker}", get(stocks::by_ticker))
        .route("/stock/{ticker}/chart", get(stocks::chart))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
