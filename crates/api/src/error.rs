//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::ErrorKind;
use store::StoreError;

use crate::routes::ApiResponse;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client, rejected before reaching the store.
    BadRequest(String),
    /// Store or domain rule violation.
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Store(err) => (status_for(err.kind()), err.to_string()),
        };

        tracing::debug!(%status, error = %message, "request rejected");
        metrics::counter!("http_request_errors_total", "status" => status.as_u16().to_string())
            .increment(1);
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidArgument | ErrorKind::EmptyCart => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InsufficientStock | ErrorKind::InvalidTransition => StatusCode::CONFLICT,
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<domain::CustomerError> for ApiError {
    fn from(err: domain::CustomerError) -> Self {
        ApiError::Store(err.into())
    }
}
