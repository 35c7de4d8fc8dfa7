//! Shopping cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::ProductId;
use domain::{Cart, CartLine, Money};
use serde::{Deserialize, Serialize};

use super::{ApiResponse, AppState, positive_quantity};
use crate::error::ApiError;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    #[serde(default)]
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DiscountRequest {
    pub amount_cents: i64,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub discount_cents: i64,
    pub subtotal_cents: i64,
    pub total_cents: i64,
    pub item_count: u32,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            discount_cents: cart.discount().cents(),
            subtotal_cents: cart.subtotal().cents(),
            total_cents: cart.total().cents(),
            item_count: cart.item_count(),
            items: cart.lines().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// -- Handlers --

/// GET /api/cart
#[tracing::instrument(skip(state))]
pub async fn get(State(state): State<Arc<AppState>>) -> Json<ApiResponse<CartView>> {
    ApiResponse::ok(state.store.cart().into())
}

/// POST /api/cart/add: adds units of a product, merging with an existing line.
#[tracing::instrument(skip(state, req))]
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let product_id = required_product_id(req.product_id)?;
    let quantity = positive_quantity(req.quantity)?;
    let cart = state.store.add_to_cart(&product_id, quantity)?;
    Ok(ApiResponse::ok(cart.into()))
}

/// POST /api/cart/remove
#[tracing::instrument(skip(state, req))]
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemoveItemRequest>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let product_id = required_product_id(req.product_id)?;
    let cart = state.store.remove_from_cart(&product_id)?;
    Ok(ApiResponse::ok(cart.into()))
}

/// POST /api/cart/clear
#[tracing::instrument(skip(state))]
pub async fn clear(State(state): State<Arc<AppState>>) -> Json<ApiResponse<MessageResponse>> {
    state.store.clear_cart();
    ApiResponse::ok(MessageResponse {
        message: "Cart cleared",
    })
}

/// POST /api/cart/discount: sets the flat discount, replacing any previous one.
#[tracing::instrument(skip(state, req))]
pub async fn discount(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DiscountRequest>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let cart = state
        .store
        .set_discount(Money::from_cents(req.amount_cents))?;
    Ok(ApiResponse::ok(cart.into()))
}

fn required_product_id(raw: String) -> Result<ProductId, ApiError> {
    let id = ProductId::new(raw);
    if id.is_blank() {
        return Err(ApiError::BadRequest("product_id is required".to_string()));
    }
    Ok(id)
}
