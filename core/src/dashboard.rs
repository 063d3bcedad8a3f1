//! End-to-end operations: build, execute, parse.
//!
//! # Design
//! `Dashboard` pairs the three service clients with one [`Transport`]. It is
//! immutable after construction and keeps no cache: every list call goes to
//! the backend. Each operation logs at `debug` when dispatched and at `warn`
//! when it fails; the returned error already carries the generic message.

use tracing::{debug, warn};

use crate::clients::{AiClient, OrderClient, ProductClient};
use crate::config::ServiceConfig;
use crate::error::{ApiError, Operation};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Order, OrderUpdateData, Product, ProductFormData, Receipt};

/// The dashboard's view of its three backends.
#[derive(Debug, Clone)]
pub struct Dashboard<T = UreqTransport> {
    products: ProductClient,
    orders: OrderClient,
    ai: AiClient,
    transport: T,
}

impl Dashboard<UreqTransport> {
    /// A dashboard talking HTTP through `ureq`.
    pub fn connect(config: &ServiceConfig) -> Self {
        Self::new(config, UreqTransport::new())
    }
}

impl<T: Transport> Dashboard<T> {
    pub fn new(config: &ServiceConfig, transport: T) -> Self {
        Self {
            products: ProductClient::new(&config.product_base_url),
            orders: OrderClient::new(&config.order_base_url),
            ai: AiClient::new(&config.ai_base_url),
            transport,
        }
    }

    pub fn product_client(&self) -> &ProductClient {
        &self.products
    }

    pub fn order_client(&self) -> &OrderClient {
        &self.orders
    }

    pub fn ai_client(&self) -> &AiClient {
        &self.ai
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn round_trip<R>(
        &self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result = request.and_then(|request| {
            debug!(%operation, method = %request.method, url = %request.url, "dispatching");
            let response = self
                .transport
                .execute(request)
                .map_err(|source| ApiError::Transport { operation, source })?;
            debug!(%operation, status = response.status, "response received");
            parse(response)
        });
        if let Err(e) = &result {
            warn!(%operation, error = %e, detail = ?e, "request failed");
        }
        result
    }

    pub fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.round_trip(
            Operation::ListProducts,
            Ok(self.products.build_list_products()),
            |response| self.products.parse_list_products(response),
        )
    }

    pub fn create_product(&self, input: &ProductFormData) -> Result<Product, ApiError> {
        self.round_trip(
            Operation::CreateProduct,
            self.products.build_create_product(input),
            |response| self.products.parse_create_product(response),
        )
    }

    pub fn delete_product(&self, sku: &str) -> Result<(), ApiError> {
        self.round_trip(
            Operation::DeleteProduct,
            Ok(self.products.build_delete_product(sku)),
            |response| self.products.parse_delete_product(response),
        )
    }

    pub fn generate_description(&self, keywords: &str) -> Result<String, ApiError> {
        self.round_trip(
            Operation::GenerateDescription,
            self.ai.build_generate_description(keywords),
            |response| self.ai.parse_generate_description(response),
        )
    }

    pub fn generate_image(&self, keywords: &str) -> Result<String, ApiError> {
        self.round_trip(
            Operation::GenerateImage,
            self.ai.build_generate_image(keywords),
            |response| self.ai.parse_generate_image(response),
        )
    }

    pub fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.round_trip(
            Operation::ListOrders,
            Ok(self.orders.build_list_orders()),
            |response| self.orders.parse_list_orders(response),
        )
    }

    pub fn update_order(&self, id: &str, input: &OrderUpdateData) -> Result<Receipt<Order>, ApiError> {
        self.round_trip(
            Operation::UpdateOrder,
            self.orders.build_update_order(id, input),
            |response| self.orders.parse_update_order(response),
        )
    }

    pub fn delete_order(&self, id: &str) -> Result<Receipt<Order>, ApiError> {
        self.round_trip(
            Operation::DeleteOrder,
            Ok(self.orders.build_delete_order(id)),
            |response| self.orders.parse_delete_order(response),
        )
    }
}
