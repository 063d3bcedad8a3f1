//! Product service: catalog CRUD keyed by `sku`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Insertion-ordered catalog.
pub type ProductDb = Arc<RwLock<Vec<Product>>>;

pub fn router() -> Router {
    router_with(Vec::new())
}

pub fn router_with(seed: Vec<Product>) -> Router {
    let db: ProductDb = Arc::new(RwLock::new(seed));
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{sku}", delete(delete_product))
        .with_state(db)
}

async fn list_products(State(db): State<ProductDb>) -> Json<Vec<Product>> {
    Json(db.read().await.clone())
}

async fn create_product(
    State(db): State<ProductDb>,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    if input.price < 0.0 || input.sku.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut products = db.write().await;
    if products.iter().any(|p| p.sku == input.sku) {
        return Err(StatusCode::CONFLICT);
    }
    let product = Product {
        id: Uuid::new_v4().to_string(),
        sku: input.sku,
        name: input.name,
        price: input.price,
        description: input.description,
        image_url: input.image_url,
    };
    info!(id = %product.id, sku = %product.sku, "product created");
    products.push(product.clone());
    Ok((StatusCode::CREATED, Json(product)))
}

async fn delete_product(
    State(db): State<ProductDb>,
    Path(sku): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut products = db.write().await;
    let index = products
        .iter()
        .position(|p| p.sku == sku)
        .ok_or(StatusCode::NOT_FOUND)?;
    products.remove(index);
    info!(%sku, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
