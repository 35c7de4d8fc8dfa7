//! HTTP API server with observability for the storefront order engine.
//!
//! Provides REST endpoints for the catalog, the cart, and orders, with
//! structured logging (tracing) and Prometheus metrics.
//!
//! Amounts go over the wire as integer cents under `_cents` keys
//! (`price_cents`, `subtotal_cents`, `discount_cents`, `total_cents`), never
//! as decimal `price`/`total` numbers, so `49.99 × 5` is exactly `24995`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use metrics_exporter_prometheus::PrometheusHandle;
use store::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/products", get(routes::products::list))
        .route("/api/products/{id}", get(routes::products::get))
        .route("/api/products/{id}/restock", post(routes::products::restock))
        .route("/api/cart", get(routes::cart::get))
        .route("/api/cart/add", post(routes::cart::add))
        .route("/api/cart/remove", post(routes::cart::remove))
        .route("/api/cart/clear", post(routes::cart::clear))
        .route("/api/cart/discount", post(routes::cart::discount))
        .route(
            "/api/orders",
            post(routes::orders::create).get(routes::orders::list),
        )
        .route("/api/orders/list", get(routes::orders::list))
        .route("/api/orders/{id}", get(routes::orders::get))
        .route("/api/orders/{id}/advance", post(routes::orders::advance))
        .route("/api/orders/{id}/cancel", post(routes::orders::cancel))
        .route("/api/orders/{id}/notes", put(routes::orders::set_notes))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state, optionally loading the demo catalog.
pub fn create_default_state(seed: bool) -> Arc<AppState> {
    let store = Store::new();
    if seed {
        store::seed_catalog(&store);
    }
    Arc::new(AppState { store })
}
