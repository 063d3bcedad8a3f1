//! Product table with its delete confirmation dialog.

use tracing::warn;

use super::ListPage;
use crate::dashboard::Dashboard;
use crate::transport::Transport;
use crate::types::Product;

/// Products are deleted by `sku`, so the dialog holds only that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductDialog {
    #[default]
    Closed,
    ConfirmDelete { sku: String, error: Option<String> },
}

#[derive(Debug, Clone, Default)]
pub struct ProductListState {
    page: ListPage<Product>,
    dialog: ProductDialog,
}

impl ProductListState {
    pub fn load<T: Transport>(dashboard: &Dashboard<T>) -> Self {
        let mut state = Self::default();
        state.reload(dashboard);
        state
    }

    pub fn reload<T: Transport>(&mut self, dashboard: &Dashboard<T>) {
        self.page = ListPage::load_products(dashboard);
    }

    pub fn page(&self) -> &ListPage<Product> {
        &self.page
    }

    pub fn products(&self) -> &[Product] {
        self.page.items()
    }

    pub fn dialog(&self) -> &ProductDialog {
        &self.dialog
    }

    /// Open the delete confirmation for a listed product.
    pub fn request_delete(&mut self, sku: &str) -> bool {
        if !self.products().iter().any(|p| p.sku == sku) {
            return false;
        }
        self.dialog = ProductDialog::ConfirmDelete {
            sku: sku.to_string(),
            error: None,
        };
        true
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = ProductDialog::Closed;
    }

    /// Delete the selected product. On success the dialog closes and the
    /// list is re-fetched; on failure the dialog stays open with the error.
    pub fn confirm<T: Transport>(&mut self, dashboard: &Dashboard<T>) -> bool {
        let ProductDialog::ConfirmDelete { sku, error } = &mut self.dialog else {
            return false;
        };
        match dashboard.delete_product(sku) {
            Ok(()) => {
                self.dialog = ProductDialog::Closed;
                self.reload(dashboard);
                true
            }
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "product delete failed");
                *error = Some(e.to_string());
                false
            }
        }
    }
}
