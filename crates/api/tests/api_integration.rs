//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain::{AppData, seed::demo_data};
use metrics_exporter_prometheus::PrometheusHandle;
use snapshot_store::InMemoryStore;
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

async fn setup() -> axum::Router {
    let store = InMemoryStore::new(demo_data());
    let state = api::create_default_state(store).await.unwrap();
    api::create_app(state, get_metrics_handle())
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, body).await
}

async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn snapshot(app: &axum::Router) -> AppData {
    let (status, json) = get_json(app, "/snapshot").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup().await;
    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup().await;
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

#[tokio::test]
async fn test_snapshot_uses_wire_field_names() {
    let app = setup().await;
    let (status, json) = get_json(&app, "/snapshot").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("customOrders").is_some());
    assert!(json.get("workOrders").is_some());
    assert_eq!(json["items"][0]["status"], "available");
}

#[tokio::test]
async fn test_pos_sale_decrements_stock() {
    let app = setup().await;

    let (status, json) = post_json(
        &app,
        "/pos/sales",
        serde_json::json!({
            "customer_id": "cust-1",
            "lines": [{"item_id": "i1", "quantity": 2}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["invoice_id"].is_string());

    let data = snapshot(&app).await;
    assert_eq!(data.item(&"i1".into()).unwrap().qty, 3);
}

#[tokio::test]
async fn test_oversell_returns_conflict() {
    let app = setup().await;

    let (status, json) = post_json(
        &app,
        "/pos/sales",
        serde_json::json!({
            "customer_id": "cust-1",
            "lines": [{"item_id": "i1", "quantity": 99}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_repeated_sale_lines_cannot_oversell() {
    let app = setup().await;

    // i1 has 5 in stock; two lines of 3 must be rejected as a whole.
    let (status, _) = post_json(
        &app,
        "/pos/sales",
        serde_json::json!({
            "customer_id": "cust-1",
            "lines": [
                {"item_id": "i1", "quantity": 3},
                {"item_id": "i1", "quantity": 3}
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let data = snapshot(&app).await;
    assert_eq!(data.item(&"i1".into()).unwrap().qty, 5);
}

#[tokio::test]
async fn test_sale_for_unknown_customer_returns_not_found() {
    let app = setup().await;

    let (status, _) = post_json(
        &app,
        "/pos/sales",
        serde_json::json!({
            "customer_id": "nobody",
            "lines": [{"item_id": "i1", "quantity": 1}]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_sale_returns_bad_request() {
    let app = setup().await;

    let (status, _) = post_json(
        &app,
        "/pos/sales",
        serde_json::json!({"customer_id": "cust-1", "lines": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_mixed_cart() {
    let app = setup().await;
    let data = snapshot(&app).await;
    let saree = serde_json::to_value(data.item(&"i1".into()).unwrap()).unwrap();
    let lehenga = serde_json::to_value(data.item(&"i2".into()).unwrap()).unwrap();

    let (status, json) = post_json(
        &app,
        "/checkout",
        serde_json::json!({
            "customer_id": "cust-2",
            "cart": {
                "lines": [
                    {"id": "i1-buy", "type": "buy", "item": saree, "quantity": 1},
                    {
                        "id": "i2-rent",
                        "type": "rent",
                        "item": lehenga,
                        "quantity": 1,
                        "startDate": "2024-06-01T00:00:00Z",
                        "endDate": "2024-06-04T00:00:00Z"
                    }
                ]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["rental_ids"].as_array().unwrap().len(), 1);

    let data = snapshot(&app).await;
    assert_eq!(data.item(&"i1".into()).unwrap().qty, 4);
    // Rentals never touch stock.
    assert_eq!(data.item(&"i2".into()).unwrap().qty, 2);
}

#[tokio::test]
async fn test_checkout_rejects_reversed_dates() {
    let app = setup().await;
    let data = snapshot(&app).await;
    let lehenga = serde_json::to_value(data.item(&"i2".into()).unwrap()).unwrap();

    let (status, _) = post_json(
        &app,
        "/checkout",
        serde_json::json!({
            "customer_id": "cust-2",
            "cart": {
                "lines": [{
                    "id": "i2-rent",
                    "type": "rent",
                    "item": lehenga,
                    "quantity": 1,
                    "startDate": "2024-06-04T00:00:00Z",
                    "endDate": "2024-06-01T00:00:00Z"
                }]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_custom_order_lifecycle() {
    let app = setup().await;

    let (status, json) = post_json(
        &app,
        "/custom-orders",
        serde_json::json!({
            "customer_id": "cust-1",
            "title": "Silk Blouse",
            "description": "Boat neck, elbow sleeves"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = json["order_id"].as_str().unwrap().to_string();

    // Received -> Cutting is adjacent and allowed.
    let (status, json) = post_json(
        &app,
        &format!("/custom-orders/{order_id}/stage"),
        serde_json::json!({"target": "Cutting"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "Cutting");

    // Skipping to Finishing is not.
    let (status, _) = post_json(
        &app,
        &format!("/custom-orders/{order_id}/stage"),
        serde_json::json!({"target": "Finishing"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_stage_move_unknown_order() {
    let app = setup().await;
    let (status, _) = post_json(
        &app,
        "/custom-orders/co-missing/stage",
        serde_json::json!({"target": "Cutting"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_upsert_and_import() {
    let app = setup().await;

    let (status, _) = send_json(
        &app,
        "PUT",
        "/items",
        serde_json::json!({"id": "i1", "sku": "SAREE-001", "title": "Banarasi Silk Saree", "qty": 12}),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = post_json(
        &app,
        "/items/import",
        serde_json::json!([
            {"id": "i7", "sku": "KURTA-7", "title": "Linen Kurta", "qty": 6},
            {"id": "i7", "sku": "KURTA-7", "title": "Linen Kurta", "qty": 9}
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["imported"], 2);

    let data = snapshot(&app).await;
    assert_eq!(data.item(&"i1".into()).unwrap().qty, 12);
    assert_eq!(data.item(&"i7".into()).unwrap().qty, 9);
}

#[tokio::test]
async fn test_reports_summary() {
    let app = setup().await;
    let (status, json) = get_json(&app, "/reports/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["rental_count"], 1);
    assert_eq!(json["summary"]["total_revenue"], 2832);
    assert!(json["monthly"].is_array());
    assert!(json["top_rented"].is_array());
}

#[tokio::test]
async fn test_reset_restores_seed() {
    let app = setup().await;

    post_json(
        &app,
        "/pos/sales",
        serde_json::json!({
            "customer_id": "cust-1",
            "lines": [{"item_id": "i1", "quantity": 5}]
        }),
    )
    .await;

    let (status, json) = post_json(&app, "/reset", serde_json::Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["qty"], 5);
}
