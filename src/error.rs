use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// HTTP failure modes of the chart endpoint.
///
/// The quote endpoints never produce an error status; their failures are
/// embedded in the payload instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No chart data available")]
    ChartEmpty,

    #[error("Failed to fetch chart data")]
    ChartFetch,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ChartEmpty => StatusCode::NOT_FOUND,
            AppError::ChartFetch => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
