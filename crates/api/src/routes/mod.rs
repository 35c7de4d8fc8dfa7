//! Route handlers and the JSON envelope they share.

pub mod cart;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;

use axum::Json;
use serde::Serialize;
use store::Store;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub store: Store,
}

/// Envelope wrapping every JSON response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Rejects zero, negative, and out-of-range quantities before they reach the store.
pub(crate) fn positive_quantity(quantity: i64) -> Result<u32, ApiError> {
    match u32::try_from(quantity) {
        Ok(q) if q > 0 => Ok(q),
        _ => Err(ApiError::BadRequest(format!(
            "Quantity must be a positive integer, got {quantity}"
        ))),
    }
}
