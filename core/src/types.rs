//! Domain DTOs shared with the product, order and AI services.
//!
//! # Design
//! Field names follow the services' camelCase JSON. The order service is
//! backed by a document store, so decoding is tolerant where its output has
//! been seen to vary: identifiers and item quantities may arrive as numbers,
//! and timestamps may arrive wrapped as `{"$date": "..."}`, as epoch
//! milliseconds, or not at all. A bad timestamp never fails the order.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry owned by the product service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request payload for creating a product. The service assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub name: String,
    pub sku: String,
    #[serde(deserialize_with = "string_or_number")]
    pub quantity: String,
}

/// An order as reported by the makeline service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub timestamp: OrderTimestamp,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<OrderTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    pub fn status(&self) -> OrderStatus {
        OrderStatus::parse(&self.status)
    }
}

/// Partial update accepted by the makeline service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUpdateData {
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A point in time as sent by the order service: a plain string, a
/// `{"$date": "..."}` wrapper or epoch milliseconds. Anything else is kept
/// verbatim in `Unrecognized` and renders as `Invalid Date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OrderTimestamp {
    Plain(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
    Millis(i64),
    Unrecognized(serde_json::Value),
}

impl Default for OrderTimestamp {
    fn default() -> Self {
        OrderTimestamp::Unrecognized(serde_json::Value::Null)
    }
}

impl OrderTimestamp {
    pub const INVALID: &'static str = "Invalid Date";

    /// The raw string, unwrapped. `None` for numeric or unrecognized values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OrderTimestamp::Plain(raw) => Some(raw),
            OrderTimestamp::Wrapped { date } => Some(date),
            OrderTimestamp::Millis(_) | OrderTimestamp::Unrecognized(_) => None,
        }
    }

    /// Parses RFC 3339 with an offset, or a civil date-time taken as UTC.
    /// Epoch milliseconds are taken as-is.
    pub fn instant(&self) -> Option<jiff::Timestamp> {
        if let OrderTimestamp::Millis(millis) = self {
            return jiff::Timestamp::from_millisecond(*millis).ok();
        }
        let raw = self.as_str()?.trim();
        if let Ok(ts) = raw.parse::<jiff::Timestamp>() {
            return Some(ts);
        }
        let civil = raw.parse::<jiff::civil::DateTime>().ok()?;
        civil
            .to_zoned(jiff::tz::TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp())
    }

    /// `Mar 05, 2024, 01:02:03 PM` in UTC, or `Invalid Date`.
    pub fn display(&self) -> String {
        match self.instant() {
            Some(ts) => ts.strftime("%b %d, %Y, %I:%M:%S %p").to_string(),
            None => Self::INVALID.to_string(),
        }
    }
}

/// Closed mapping of the free-form order status string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processed,
    Completed,
    Cancelled,
    /// Any status the dashboard does not know; keeps the raw string.
    Other(String),
}

impl OrderStatus {
    /// The statuses offered by the edit dialog, in display order.
    pub const SELECTABLE: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processed,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Case-insensitive match against the known statuses.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processed" => OrderStatus::Processed,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processed => "processed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn indicator(&self) -> StatusIndicator {
        match self {
            OrderStatus::Completed | OrderStatus::Processed => StatusIndicator::Success,
            OrderStatus::Pending => StatusIndicator::Warning,
            OrderStatus::Cancelled => StatusIndicator::Error,
            OrderStatus::Other(_) => StatusIndicator::Neutral,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::parse(&raw)
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        OrderStatus::parse(raw)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour category of a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusIndicator {
    Success,
    Warning,
    Error,
    /// Fallback for unrecognized statuses.
    #[default]
    Neutral,
}

/// Normalized result of a mutation whose response body is not guaranteed to
/// be the resource itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt<T> {
    /// The service echoed the mutated resource.
    Entity(T),
    /// The service answered `{"message": "..."}`.
    Acknowledged(String),
    /// Empty or unrecognized body; the 2xx status is the only signal.
    Empty,
}

impl<T> Receipt<T> {
    pub fn entity(self) -> Option<T> {
        match self {
            Receipt::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Receipt::Acknowledged(message) => Some(message),
            _ => None,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
