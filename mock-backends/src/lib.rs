//! In-process stand-ins for the dashboard's three backends.
//!
//! Each service gets its own router so tests can bind them to separate
//! ports; [`app`] merges all three on one router for convenience.

pub mod ai;
pub mod orders;
pub mod products;

pub use orders::{sample_orders, Order, OrderItem};
pub use products::Product;

use axum::Router;
use tokio::net::TcpListener;

/// All three services on one router, with no orders.
pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(orders: Vec<Order>) -> Router {
    products::router()
        .merge(orders::router(orders))
        .merge(ai::router())
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}
