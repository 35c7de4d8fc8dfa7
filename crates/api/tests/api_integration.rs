//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> Router {
    api::create_app(api::create_default_state(true), get_metrics_handle())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn checkout() -> Value {
    json!({
        "name": "Ana Torres",
        "email": "ana@example.com",
        "phone": "0991234567",
        "address": "Av. Amazonas 123",
        "city": "Quito"
    })
}

async fn add_to_cart(app: &Router, product_id: &str, quantity: i64) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/cart/add",
        Some(json!({"product_id": product_id, "quantity": quantity})),
    )
    .await
}

async fn place_order(app: &Router) -> String {
    add_to_cart(app, "lamp-003", 1).await;
    let (status, json) = send(app, "POST", "/api/orders", Some(checkout())).await;
    assert_eq!(status, StatusCode::CREATED);
    json["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "ok");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

mod products {
    use super::*;

    #[tokio::test]
    async fn test_list_seeded_catalog() {
        let app = setup();
        let (status, json) = send(&app, "GET", "/api/products", None).await;

        assert_eq!(status, StatusCode::OK);
        let products = json["data"].as_array().unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products[0]["id"], "lamp-001");
        assert_eq!(products[0]["price_cents"], 4999);
        assert_eq!(products[0]["stock"], 15);
        assert_eq!(products[0]["category"], "rosa");
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let app = setup();
        let (_, json) = send(&app, "GET", "/api/products?category=girasol", None).await;

        let ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["lamp-002", "lamp-006"]);
    }

    #[tokio::test]
    async fn test_unknown_category_falls_back_to_rose() {
        let app = setup();
        let (_, json) = send(&app, "GET", "/api/products?category=tulip", None).await;

        let products = json["data"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p["category"] == "rosa"));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let app = setup();
        let (status, json) = send(&app, "GET", "/api/products/lamp-999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("lamp-999"));
    }

    #[tokio::test]
    async fn test_restock() {
        let app = setup();
        let (status, json) = send(
            &app,
            "POST",
            "/api/products/lamp-005/restock",
            Some(json!({"quantity": 4})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["stock"], 10);

        let (status, _) = send(
            &app,
            "POST",
            "/api/products/lamp-005/restock",
            Some(json!({"quantity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

mod cart {
    use super::*;

    #[tokio::test]
    async fn test_add_merges_lines() {
        let app = setup();
        add_to_cart(&app, "lamp-001", 2).await;
        let (status, json) = add_to_cart(&app, "lamp-001", 3).await;

        assert_eq!(status, StatusCode::OK);
        let cart = &json["data"];
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);
        assert_eq!(cart["items"][0]["quantity"], 5);
        assert_eq!(cart["items"][0]["price_cents"], 4999);
        assert!(cart.get("subtotal").is_none());
        assert_eq!(cart["subtotal_cents"], 24995);
        assert_eq!(cart["total_cents"], 24995);
        assert_eq!(cart["item_count"], 5);
    }

    #[tokio::test]
    async fn test_add_rejects_bad_input() {
        let app = setup();

        let (status, _) = add_to_cart(&app, "", 1).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = add_to_cart(&app, "lamp-001", 0).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = add_to_cart(&app, "lamp-001", -3).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = add_to_cart(&app, "lamp-999", 1).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_beyond_stock_conflicts() {
        let app = setup();
        let (status, json) = add_to_cart(&app, "lamp-005", 7).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);

        let (_, json) = send(&app, "GET", "/api/cart", None).await;
        assert_eq!(json["data"]["item_count"], 0);
    }

    #[tokio::test]
    async fn test_discount_above_subtotal_is_rejected() {
        let app = setup();
        add_to_cart(&app, "lamp-001", 5).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/cart/discount",
            Some(json!({"amount_cents": 30000})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        let (status, json) = send(
            &app,
            "POST",
            "/api/cart/discount",
            Some(json!({"amount_cents": 995})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["discount_cents"], 995);
        assert_eq!(json["data"]["total_cents"], 24000);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let app = setup();
        add_to_cart(&app, "lamp-001", 1).await;
        add_to_cart(&app, "lamp-002", 1).await;

        let (status, json) = send(
            &app,
            "POST",
            "/api/cart/remove",
            Some(json!({"product_id": "lamp-001"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["items"][0]["product_id"], "lamp-002");

        let (status, _) = send(
            &app,
            "POST",
            "/api/cart/remove",
            Some(json!({"product_id": "lamp-001"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(&app, "POST", "/api/cart/clear", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["message"], "Cart cleared");

        let (_, json) = send(&app, "GET", "/api/cart", None).await;
        assert!(json["data"]["items"].as_array().unwrap().is_empty());
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn test_place_order() {
        let app = setup();
        add_to_cart(&app, "lamp-001", 5).await;

        let (status, json) = send(&app, "POST", "/api/orders", Some(checkout())).await;

        assert_eq!(status, StatusCode::CREATED);
        let order = &json["data"];
        assert_eq!(order["id"], "ORD-0001");
        assert_eq!(order["total_cents"], 24995);
        assert_eq!(order["status"], "pending");
        assert_eq!(order["customer"]["city"], "Quito");
        assert_eq!(order["items"][0]["quantity"], 5);

        let (_, json) = send(&app, "GET", "/api/products/lamp-001", None).await;
        assert_eq!(json["data"]["stock"], 10);

        let (_, json) = send(&app, "GET", "/api/cart", None).await;
        assert_eq!(json["data"]["item_count"], 0);
    }

    #[tokio::test]
    async fn test_place_order_with_empty_cart() {
        let app = setup();
        let (status, json) = send(&app, "POST", "/api/orders", Some(checkout())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        let (_, json) = send(&app, "GET", "/api/orders", None).await;
        assert!(json["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_with_invalid_customer() {
        let app = setup();
        add_to_cart(&app, "lamp-001", 1).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/orders",
            Some(json!({"name": "Ana", "email": "not-an-email", "address": "x", "city": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = send(&app, "GET", "/api/cart", None).await;
        assert_eq!(json["data"]["item_count"], 1);
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let app = setup();
        let first = place_order(&app).await;
        let second = place_order(&app).await;
        assert_eq!(first, "ORD-0001");
        assert_eq!(second, "ORD-0002");

        for uri in ["/api/orders", "/api/orders/list"] {
            let (status, json) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK);
            let ids: Vec<&str> = json["data"]
                .as_array()
                .unwrap()
                .iter()
                .map(|o| o["id"].as_str().unwrap())
                .collect();
            assert_eq!(ids, ["ORD-0001", "ORD-0002"]);
        }

        let (status, json) = send(&app, "GET", "/api/orders/ORD-0002", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], "ORD-0002");
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_ids() {
        let app = setup();

        let (status, _) = send(&app, "GET", "/api/orders/ORD-0042", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", "/api/orders/not-an-id", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_advance_through_lifecycle() {
        let app = setup();
        let id = place_order(&app).await;
        let uri = format!("/api/orders/{id}/advance");

        for expected in ["paid", "prepared", "shipped", "delivered"] {
            let (status, json) = send(&app, "POST", &uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["data"]["status"], expected);
        }

        let (status, json) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_cancel_restocks_and_blocks_advance() {
        let app = setup();
        let id = place_order(&app).await;

        let (_, json) = send(&app, "GET", "/api/products/lamp-003", None).await;
        assert_eq!(json["data"]["stock"], 11);

        let (status, json) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "cancelled");

        let (_, json) = send(&app, "GET", "/api/products/lamp-003", None).await;
        assert_eq!(json["data"]["stock"], 12);

        let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/advance"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_set_notes() {
        let app = setup();
        let id = place_order(&app).await;

        let (status, json) = send(
            &app,
            "PUT",
            &format!("/api/orders/{id}/notes"),
            Some(json!({"notes": "Gift wrap, please"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["notes"], "Gift wrap, please");
        assert_eq!(json["data"]["status"], "pending");
    }
}
