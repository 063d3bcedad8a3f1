//! Error types for the dashboard API clients.
//!
//! # Design
//! Every failure names the [`Operation`] it belongs to and displays only that
//! operation's generic message ("Failed to fetch products"). Callers branch
//! on [`FailureKind`] at most; status code, response body and the underlying
//! transport or serde error stay on the value for logging.

use std::fmt;

use thiserror::Error;

/// Every request the dashboard can issue against its backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListProducts,
    CreateProduct,
    DeleteProduct,
    GenerateDescription,
    GenerateImage,
    ListOrders,
    UpdateOrder,
    DeleteOrder,
}

impl Operation {
    /// The user-facing message shown when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListProducts => "Failed to fetch products",
            Operation::CreateProduct => "Failed to create product",
            Operation::DeleteProduct => "Failed to delete product",
            Operation::GenerateDescription => "Failed to generate description",
            Operation::GenerateImage => "Failed to generate image",
            Operation::ListOrders => "Failed to fetch orders",
            Operation::UpdateOrder => "Failed to update order",
            Operation::DeleteOrder => "Failed to delete order",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::ListProducts => "list_products",
            Operation::CreateProduct => "create_product",
            Operation::DeleteProduct => "delete_product",
            Operation::GenerateDescription => "generate_description",
            Operation::GenerateImage => "generate_image",
            Operation::ListOrders => "list_orders",
            Operation::UpdateOrder => "update_order",
            Operation::DeleteOrder => "delete_order",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No usable response: connection error, or a body that could not be
    /// encoded or decoded.
    FetchFailed,
    /// The backend answered with a non-2xx status.
    NonSuccess,
}

/// A network-level failure reported by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
#[error("{method} {url}: {message}")]
pub struct TransportError {
    pub method: String,
    pub url: String,
    pub message: String,
}

/// Errors returned by client parse methods and the dashboard facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    /// The backend returned a status outside 200..300.
    #[error("{}", .operation.failure_message())]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("{}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized to JSON.
    #[error("{}", .operation.failure_message())]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Status { operation, .. }
            | ApiError::Decode { operation, .. }
            | ApiError::Encode { operation, .. } => *operation,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Status { .. } => FailureKind::NonSuccess,
            ApiError::Transport { .. } | ApiError::Decode { .. } | ApiError::Encode { .. } => {
                FailureKind::FetchFailed
            }
        }
    }

    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
