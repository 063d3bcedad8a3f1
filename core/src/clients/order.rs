//! Makeline (order service) client.

use super::{decode, decode_receipt, encode_segment, json_request, request, trim_base, APPLICATION_JSON};
use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Order, OrderUpdateData, Receipt};

/// Builds and parses requests for `{base}/api/orders`.
///
/// Orders are addressed by their service-assigned `_id`. Update and delete
/// responses vary between deployments, so both normalize to a [`Receipt`].
#[derive(Debug, Clone)]
pub struct OrderClient {
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn order_url(&self, id: &str) -> String {
        format!("{}/api/orders/{}", self.base_url, encode_segment(id))
    }

    pub fn build_list_orders(&self) -> HttpRequest {
        request(
            HttpMethod::Get,
            format!("{}/api/orders", self.base_url),
            APPLICATION_JSON,
        )
    }

    pub fn build_update_order(&self, id: &str, input: &OrderUpdateData) -> Result<HttpRequest, ApiError> {
        json_request(
            Operation::UpdateOrder,
            HttpMethod::Put,
            self.order_url(id),
            APPLICATION_JSON,
            input,
        )
    }

    pub fn build_delete_order(&self, id: &str) -> HttpRequest {
        request(HttpMethod::Delete, self.order_url(id), APPLICATION_JSON)
    }

    pub fn parse_list_orders(&self, response: HttpResponse) -> Result<Vec<Order>, ApiError> {
        decode(Operation::ListOrders, response)
    }

    pub fn parse_update_order(&self, response: HttpResponse) -> Result<Receipt<Order>, ApiError> {
        decode_receipt(Operation::UpdateOrder, response)
    }

    pub fn parse_delete_order(&self, response: HttpResponse) -> Result<Receipt<Order>, ApiError> {
        decode_receipt(Operation::DeleteOrder, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderStatus;

    const ORDER: &str = r#"{
        "_id":"65f0c0ffee","orderId":"1001",
        "items":[{"name":"Espresso Cup","sku":"CUP-001","quantity":"2"}],
        "timestamp":"2024-03-05T13:02:03Z","status":"completed",
        "processedAt":"2024-03-05T14:00:00Z","notes":"gift wrap"
    }"#;

    fn client() -> OrderClient {
        OrderClient::new("http://localhost:3070")
    }

    #[test]
    fn build_list_orders_produces_correct_request() {
        let req = client().build_list_orders();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3070/api/orders");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_order_sends_only_present_fields() {
        let input = OrderUpdateData {
            status: OrderStatus::Completed,
            notes: None,
        };
        let req = client().build_update_order("65f0c0ffee", &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3070/api/orders/65f0c0ffee");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "completed"}));
    }

    #[test]
    fn build_delete_order_produces_correct_request() {
        let req = client().build_delete_order("65f0c0ffee");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3070/api/orders/65f0c0ffee");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_orders_success() {
        let orders = client()
            .parse_list_orders(HttpResponse::new(200, format!("[{ORDER}]")))
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, "65f0c0ffee");
        assert_eq!(orders[0].items[0].quantity, "2");
        assert_eq!(orders[0].notes.as_deref(), Some("gift wrap"));
    }

    #[test]
    fn parse_list_orders_non_2xx() {
        let err = client()
            .parse_list_orders(HttpResponse::new(502, "bad gateway"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch orders");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn parse_update_order_returns_the_order_when_echoed() {
        let receipt = client()
            .parse_update_order(HttpResponse::new(200, ORDER))
            .unwrap();
        let order = receipt.entity().unwrap();
        assert_eq!(order.status(), OrderStatus::Completed);
    }

    #[test]
    fn parse_update_order_accepts_acknowledgement() {
        let receipt = client()
            .parse_update_order(HttpResponse::new(200, r#"{"message":"Order updated successfully"}"#))
            .unwrap();
        assert_eq!(receipt.message(), Some("Order updated successfully"));
    }

    #[test]
    fn parse_delete_order_success_and_failure() {
        let receipt = client()
            .parse_delete_order(HttpResponse::new(200, r#"{"message":"Order deleted"}"#))
            .unwrap();
        assert_eq!(receipt, Receipt::Acknowledged("Order deleted".to_string()));

        let receipt = client().parse_delete_order(HttpResponse::new(204, "")).unwrap();
        assert_eq!(receipt, Receipt::Empty);

        let err = client()
            .parse_delete_order(HttpResponse::new(404, ""))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete order");
    }
}
