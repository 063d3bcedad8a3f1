use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_backends::{app, app_with, sample_orders, Order, Product};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- products ---

#[tokio::test]
async fn list_products_empty() {
    let resp = send(&app(), empty_request("GET", "/api/products")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn create_product_returns_201_with_assigned_id() {
    let resp = send(
        &app(),
        json_request(
            "POST",
            "/api/products",
            r#"{"name":"Espresso Cup","sku":"CUP-001","price":12.5}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Product = body_json(resp).await;
    assert!(!product.id.is_empty());
    assert_eq!(product.sku, "CUP-001");
    assert_eq!(product.price, 12.5);
}

#[tokio::test]
async fn create_product_malformed_json_returns_422() {
    let resp = send(&app(), json_request("POST", "/api/products", r#"{"name":"x"}"#)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_product_negative_price_returns_400() {
    let resp = send(
        &app(),
        json_request("POST", "/api/products", r#"{"name":"x","sku":"X","price":-1}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn products_keep_insertion_order_and_reject_duplicate_sku() {
    let app = app();
    for sku in ["B-2", "A-1"] {
        let body = format!(r#"{{"name":"n","sku":"{sku}","price":1}}"#);
        let resp = send(&app, json_request("POST", "/api/products", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
    let resp = send(
        &app,
        json_request("POST", "/api/products", r#"{"name":"n","sku":"A-1","price":1}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let products: Vec<Product> = body_json(send(&app, empty_request("GET", "/api/products")).await).await;
    let skus: Vec<&str> = products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, ["B-2", "A-1"]);
}

#[tokio::test]
async fn delete_product_by_sku() {
    let app = app();
    send(
        &app,
        json_request("POST", "/api/products", r#"{"name":"n","sku":"CUP-001","price":1}"#),
    )
    .await;

    let resp = send(&app, empty_request("DELETE", "/api/products/CUP-001")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&app, empty_request("DELETE", "/api/products/CUP-001")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- orders ---

#[tokio::test]
async fn list_orders_returns_seed() {
    let resp = send(&app_with(sample_orders()), empty_request("GET", "/api/orders")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let orders: Vec<Order> = body_json(resp).await;
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].order_id, "1001");
}

#[tokio::test]
async fn update_order_to_completed_stamps_processed_at() {
    let app = app_with(sample_orders());
    let resp = send(
        &app,
        json_request(
            "PUT",
            "/api/orders/65f0a1b2c3d4e5f601000001",
            r#"{"status":"completed"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let order: Order = body_json(resp).await;
    assert_eq!(order.status, "completed");
    assert!(order.processed_at.is_some());
    assert!(order.notes.is_none());
    assert_eq!(order.items.len(), 1);
}

#[tokio::test]
async fn update_order_keeps_existing_processed_at() {
    let app = app_with(sample_orders());
    let resp = send(
        &app,
        json_request(
            "PUT",
            "/api/orders/65f0a1b2c3d4e5f601000002",
            r#"{"status":"completed","notes":"left at door"}"#,
        ),
    )
    .await;
    let order: Order = body_json(resp).await;
    assert_eq!(order.processed_at, Some(serde_json::json!("2024-03-06T09:00:00Z")));
    assert_eq!(order.notes.as_deref(), Some("left at door"));
}

#[tokio::test]
async fn update_order_not_found() {
    let resp = send(
        &app(),
        json_request("PUT", "/api/orders/missing", r#"{"status":"completed"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_order_acknowledges_with_message() {
    let app = app_with(sample_orders());
    let resp = send(&app, empty_request("DELETE", "/api/orders/65f0a1b2c3d4e5f601000003")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: serde_json::Value = body_json(resp).await;
    assert_eq!(ack["message"], "Order deleted successfully");

    let orders: Vec<Order> = body_json(send(&app, empty_request("GET", "/api/orders")).await).await;
    assert_eq!(orders.len(), 2);

    let resp = send(&app, empty_request("DELETE", "/api/orders/65f0a1b2c3d4e5f601000003")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- ai ---

#[tokio::test]
async fn generate_description_returns_plain_text() {
    let resp = send(
        &app(),
        json_request(
            "POST",
            "/api/generate-description",
            r#"{"keywords":"ceramic mug"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    let text = String::from_utf8(body_bytes(resp).await.to_vec()).unwrap();
    assert!(text.contains("ceramic mug"));
}

#[tokio::test]
async fn generate_image_returns_image_url() {
    let resp = send(
        &app(),
        json_request("POST", "/api/generate-image", r#"{"keywords":"Ceramic Mug"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body["imageUrl"],
        "https://images.example.com/generated/ceramic-mug.png"
    );
}

#[tokio::test]
async fn blank_keywords_return_400() {
    for uri in ["/api/generate-description", "/api/generate-image"] {
        let resp = send(&app(), json_request("POST", uri, r#"{"keywords":"  "}"#)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}
