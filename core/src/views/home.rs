//! Landing page summary: the product count card.

use super::ListPage;
use crate::dashboard::Dashboard;
use crate::transport::Transport;
use crate::types::Product;

/// Shown in place of the count while the products are being fetched.
pub const COUNT_PENDING: &str = "...";

#[derive(Debug, Clone, Default)]
pub struct HomeSummary {
    products: ListPage<Product>,
}

impl HomeSummary {
    pub fn load<T: Transport>(dashboard: &Dashboard<T>) -> Self {
        let mut summary = Self::default();
        summary.reload(dashboard);
        summary
    }

    pub fn reload<T: Transport>(&mut self, dashboard: &Dashboard<T>) {
        self.products = ListPage::load_products(dashboard);
    }

    /// Number of listed products; `0` when the fetch failed.
    pub fn product_count(&self) -> usize {
        self.products.items().len()
    }

    pub fn count_label(&self) -> String {
        if self.products.is_loading() {
            COUNT_PENDING.to_string()
        } else {
            self.product_count().to_string()
        }
    }

    /// Banner message after a failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.products.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_is_pending_until_loaded() {
        let summary = HomeSummary::default();
        assert_eq!(summary.count_label(), COUNT_PENDING);
        assert_eq!(summary.product_count(), 0);
        assert!(summary.error().is_none());
    }

    #[test]
    fn failed_load_counts_zero_with_banner() {
        let summary = HomeSummary {
            products: ListPage::Failed("Failed to fetch products".to_string()),
        };
        assert_eq!(summary.count_label(), "0");
        assert_eq!(summary.error(), Some("Failed to fetch products"));
    }
}
