//! Rendering-free state behind the dashboard pages.
//!
//! Every mutation goes through the [`Dashboard`](crate::Dashboard) and, on
//! success, is followed by a full re-fetch of the affected list. Failures are
//! caught here and stored as messages; they never propagate further.

pub mod home;
pub mod order_list;
pub mod product_form;
pub mod product_list;

pub use home::HomeSummary;
pub use order_list::{OrderDialog, OrderEditDraft, OrderListState, OrderRow};
pub use product_form::ProductForm;
pub use product_list::{ProductDialog, ProductListState};

use tracing::warn;

use crate::dashboard::Dashboard;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Order, Product};

/// Load state of a list page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPage<T> {
    Loading,
    Failed(String),
    Empty,
    Ready(Vec<T>),
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        ListPage::Loading
    }
}

impl<T> ListPage<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => ListPage::Empty,
            Ok(items) => ListPage::Ready(items),
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "list page failed to load");
                ListPage::Failed(e.to_string())
            }
        }
    }

    /// Loaded items; empty unless `Ready`.
    pub fn items(&self) -> &[T] {
        match self {
            ListPage::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListPage::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListPage::Loading)
    }
}

impl ListPage<Product> {
    pub fn load_products<T: Transport>(dashboard: &Dashboard<T>) -> Self {
        Self::from_result(dashboard.get_products())
    }
}

impl ListPage<Order> {
    pub fn load_orders<T: Transport>(dashboard: &Dashboard<T>) -> Self {
        Self::from_result(dashboard.get_orders())
    }
}
