//! Order placement and lifecycle endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::OrderId;
use domain::{Customer, Order};
use serde::Deserialize;

use super::{ApiResponse, AppState};
use crate::error::ApiError;

// -- Request types --

/// Checkout form. Missing fields arrive as empty strings and are rejected
/// by customer validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceOrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    #[serde(default)]
    pub notes: String,
}

// -- Handlers --

/// POST /api/orders: converts the cart into an order for the given customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), ApiError> {
    let customer = Customer::new(&req.name, &req.email, &req.phone, &req.address, &req.city)?;
    let order = state.store.place_order(customer)?;
    Ok((StatusCode::CREATED, ApiResponse::ok(order)))
}

/// GET /api/orders: every order in placement sequence.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Order>>> {
    ApiResponse::ok(state.store.list_orders())
}

/// GET /api/orders/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.store.get_order(parse_order_id(&id)?)?;
    Ok(ApiResponse::ok(order))
}

/// POST /api/orders/{id}/advance: moves the order one step along the lifecycle.
#[tracing::instrument(skip(state))]
pub async fn advance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.store.advance_order(parse_order_id(&id)?)?;
    Ok(ApiResponse::ok(order))
}

/// POST /api/orders/{id}/cancel
#[tracing::instrument(skip(state))]
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.store.cancel_order(parse_order_id(&id)?)?;
    Ok(ApiResponse::ok(order))
}

/// PUT /api/orders/{id}/notes
#[tracing::instrument(skip(state, req))]
pub async fn set_notes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<NotesRequest>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    let order = state.store.set_order_notes(parse_order_id(&id)?, req.notes)?;
    Ok(ApiResponse::ok(order))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse::<OrderId>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
