//! Product catalog client.

use super::{check_status, decode, encode_segment, json_request, request, trim_base, APPLICATION_JSON};
use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductFormData};

/// Builds and parses requests for `{base}/api/products`.
///
/// Products are deleted by `sku`, not by their service-assigned `id`.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn build_list_products(&self) -> HttpRequest {
        request(HttpMethod::Get, self.collection_url(), APPLICATION_JSON)
    }

    pub fn build_create_product(&self, input: &ProductFormData) -> Result<HttpRequest, ApiError> {
        json_request(
            Operation::CreateProduct,
            HttpMethod::Post,
            self.collection_url(),
            APPLICATION_JSON,
            input,
        )
    }

    pub fn build_delete_product(&self, sku: &str) -> HttpRequest {
        let url = format!("{}/{}", self.collection_url(), encode_segment(sku));
        request(HttpMethod::Delete, url, APPLICATION_JSON)
    }

    /// Products in the order the service returned them.
    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        decode(Operation::ListProducts, response)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        decode(Operation::CreateProduct, response)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(Operation::DeleteProduct, &response)
    }
}
