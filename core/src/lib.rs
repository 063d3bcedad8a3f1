//! Client core for the store admin dashboard.
//!
//! # Overview
//! The dashboard manages products, orders and AI-generated product content
//! through three independent HTTP backends: the product service, the
//! makeline (order) service and the AI service. This crate owns the domain
//! types, one stateless client per backend, the transport that executes
//! requests, and the rendering-free state behind each dashboard page.
//!
//! # Design
//! - Clients follow the host-does-IO split: `build_*` produces an
//!   [`HttpRequest`], `parse_*` consumes an [`HttpResponse`]. Neither touches
//!   the network, so both are tested from plain data.
//! - [`Dashboard`] joins the clients with a [`Transport`]; the default
//!   transport is a blocking `ureq` agent.
//! - Base URLs live in an explicit [`ServiceConfig`] resolved once at
//!   startup.
//! - Every failure is an [`ApiError`] that displays the operation's generic
//!   message; views store that message instead of propagating the error.
//! - DTOs are defined independently from the mock-backends crate;
//!   integration tests catch schema drift.

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod views;

pub use clients::{AiClient, OrderClient, ProductClient};
pub use config::{ConfigError, DeploymentMode, ServiceConfig};
pub use dashboard::Dashboard;
pub use error::{ApiError, FailureKind, Operation, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Order, OrderItem, OrderStatus, OrderTimestamp, OrderUpdateData, Product, ProductFormData, Receipt,
    StatusIndicator,
};
pub use views::{HomeSummary, ListPage, OrderListState, ProductForm, ProductListState};
