//! Catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use common::ProductId;
use domain::{Category, Product};
use serde::Deserialize;

use super::{ApiResponse, AppState, positive_quantity};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub quantity: i64,
}

/// GET /api/products: all products, or one category with `?category=`.
///
/// Unrecognised category tokens fall back to roses instead of failing.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<ApiResponse<Vec<Product>>> {
    let products = match query.category.as_deref() {
        Some(token) => state
            .store
            .list_products_by_category(Category::from_query(token)),
        None => state.store.list_products(),
    };
    ApiResponse::ok(products)
}

/// GET /api/products/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.store.get_product(&ProductId::new(id))?;
    Ok(ApiResponse::ok(product))
}

/// POST /api/products/{id}/restock: adds units to a product's stock.
#[tracing::instrument(skip(state, req))]
pub async fn restock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RestockRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let quantity = positive_quantity(req.quantity)?;
    let product = state.store.restock(&ProductId::new(id), quantity)?;
    Ok(ApiResponse::ok(product))
}
