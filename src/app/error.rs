use crate::utils::error::AggregatorError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures that end a request. Everything recoverable is absorbed before this point.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to fetch Steam data: {0}")]
    Upstream(#[from] AggregatorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(err) => {
                tracing::error!(
                    "Failed to fetch Steam data: {} (category: {:?})",
                    err,
                    err.category()
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch Steam data".to_string(),
                )
                    .into_response()
            }
        }
    }
}
