//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use super::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health: returns system health status.
pub async fn check() -> Json<ApiResponse<HealthResponse>> {
    ApiResponse::ok(HealthResponse { status: "ok" })
}
