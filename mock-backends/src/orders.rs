//! Makeline service: order listing, status updates and deletes.
//!
//! Orders are never created over HTTP here; they arrive from the seed the
//! router is built with.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub sku: String,
    pub quantity: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    pub items: Vec<OrderItem>,
    /// Either a string or a `{"$date": ...}` wrapper, as the store emits.
    pub timestamp: Value,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrder {
    pub status: String,
    pub notes: Option<String>,
}

pub type OrderDb = Arc<RwLock<Vec<Order>>>;

pub fn router(seed: Vec<Order>) -> Router {
    let db: OrderDb = Arc::new(RwLock::new(seed));
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}", put(update_order).delete(delete_order))
        .with_state(db)
}

/// Three orders covering both timestamp shapes and a processed order.
pub fn sample_orders() -> Vec<Order> {
    let item = |name: &str, sku: &str, quantity: &str| OrderItem {
        name: name.to_string(),
        sku: sku.to_string(),
        quantity: quantity.to_string(),
    };
    vec![
        Order {
            id: "65f0a1b2c3d4e5f601000001".to_string(),
            order_id: "1001".to_string(),
            items: vec![item("Espresso Cup", "CUP-001", "2")],
            timestamp: json!("2024-03-05T13:02:03Z"),
            status: "pending".to_string(),
            processed_at: None,
            notes: None,
        },
        Order {
            id: "65f0a1b2c3d4e5f601000002".to_string(),
            order_id: "1002".to_string(),
            items: vec![
                item("Latte Mug", "MUG-002", "1"),
                item("Saucer", "SAU-003", "4"),
            ],
            timestamp: json!({ "$date": "2024-03-06T08:15:00Z" }),
            status: "processed".to_string(),
            processed_at: Some(json!("2024-03-06T09:00:00Z")),
            notes: Some("fragile".to_string()),
        },
        Order {
            id: "65f0a1b2c3d4e5f601000003".to_string(),
            order_id: "1003".to_string(),
            items: vec![item("Tea Pot", "POT-004", "1")],
            timestamp: json!("2024-03-07T17:45:30Z"),
            status: "cancelled".to_string(),
            processed_at: None,
            notes: None,
        },
    ]
}

fn marks_processed(status: &str) -> bool {
    matches!(status.to_ascii_lowercase().as_str(), "processed" | "completed")
}

async fn list_orders(State(db): State<OrderDb>) -> Json<Vec<Order>> {
    Json(db.read().await.clone())
}

async fn update_order(
    State(db): State<OrderDb>,
    Path(id): Path<String>,
    Json(input): Json<UpdateOrder>,
) -> Result<Json<Order>, StatusCode> {
    let mut orders = db.write().await;
    let order = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if marks_processed(&input.status) && order.processed_at.is_none() {
        order.processed_at = Some(Value::String(jiff::Timestamp::now().to_string()));
    }
    order.status = input.status;
    if let Some(notes) = input.notes {
        order.notes = Some(notes);
    }
    info!(%id, status = %order.status, "order updated");
    Ok(Json(order.clone()))
}

async fn delete_order(
    State(db): State<OrderDb>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut orders = db.write().await;
    let index = orders
        .iter()
        .position(|o| o.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    orders.remove(index);
    info!(%id, "order deleted");
    Ok(Json(json!({ "message": "Order deleted successfully" })))
}
