//! Stateless request builders and response parsers, one per backend.
//!
//! # Design
//! Each client holds only its service's base URL. Every operation is split
//! into a `build_*` method producing an [`HttpRequest`] and a `parse_*`
//! method consuming an [`HttpResponse`]; the round-trip in between belongs to
//! the caller. Any 2xx status is success, everything else collapses into
//! [`ApiError::Status`] for the operation.

pub mod ai;
pub mod order;
pub mod product;

pub use ai::AiClient;
pub use order::OrderClient;
pub use product::ProductClient;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Receipt;

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

#[derive(Deserialize)]
struct Acknowledgement {
    message: String,
}

fn request(method: HttpMethod, url: String, accept: &str) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: vec![("accept".to_string(), accept.to_string())],
        body: None,
    }
}

fn json_request<B: Serialize>(
    operation: Operation,
    method: HttpMethod,
    url: String,
    accept: &str,
    input: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|source| ApiError::Encode { operation, source })?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![
            ("accept".to_string(), accept.to_string()),
            ("content-type".to_string(), APPLICATION_JSON.to_string()),
        ],
        body: Some(body),
    })
}

/// Map non-2xx statuses to `ApiError::Status`.
fn check_status(operation: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(operation: Operation, response: HttpResponse) -> Result<T, ApiError> {
    check_status(operation, &response)?;
    serde_json::from_str(&response.body).map_err(|source| ApiError::Decode { operation, source })
}

/// Normalize a mutation response: the resource, a `{"message"}`
/// acknowledgement, or nothing usable.
fn decode_receipt<T: DeserializeOwned>(
    operation: Operation,
    response: HttpResponse,
) -> Result<Receipt<T>, ApiError> {
    check_status(operation, &response)?;
    let body = response.body.trim();
    if body.is_empty() {
        return Ok(Receipt::Empty);
    }
    if let Ok(entity) = serde_json::from_str::<T>(body) {
        return Ok(Receipt::Entity(entity));
    }
    if let Ok(ack) = serde_json::from_str::<Acknowledgement>(body) {
        return Ok(Receipt::Acknowledged(ack.message));
    }
    tracing::debug!(%operation, status = response.status, "unrecognized mutation response body");
    Ok(Receipt::Empty)
}

/// Percent-encode one path segment, leaving RFC 3986 unreserved bytes as is.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(byte as char),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
