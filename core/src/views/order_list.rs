//! Order table: expandable rows plus the edit and delete dialogs.
//!
//! Row expansion is pure local state keyed by `_id`. The dialogs hold one
//! selected order at a time; confirming issues the API call and on success
//! closes the dialog and re-fetches the whole list. On failure the dialog
//! stays open with the error inline and the same message goes to the banner.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::ListPage;
use crate::dashboard::Dashboard;
use crate::transport::Transport;
use crate::types::{Order, OrderStatus, OrderUpdateData, StatusIndicator};

/// Edit buffer: starts from the order's status with empty notes.
///
/// Until another status is picked, the update carries the order's status
/// string exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEditDraft {
    pub status: OrderStatus,
    pub notes: String,
    current: String,
}

impl OrderEditDraft {
    fn for_order(order: &Order) -> Self {
        Self {
            status: order.status(),
            notes: String::new(),
            current: order.status.clone(),
        }
    }

    fn to_update(&self) -> OrderUpdateData {
        let notes = self.notes.trim();
        let status = if self.status == OrderStatus::parse(&self.current) {
            OrderStatus::Other(self.current.clone())
        } else {
            self.status.clone()
        };
        OrderUpdateData {
            status,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrderDialog {
    #[default]
    Closed,
    ConfirmDelete {
        order: Order,
        error: Option<String>,
    },
    Edit {
        order: Order,
        draft: OrderEditDraft,
        error: Option<String>,
    },
}

impl OrderDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, OrderDialog::Closed)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            OrderDialog::Closed => None,
            OrderDialog::ConfirmDelete { error, .. } | OrderDialog::Edit { error, .. } => error.as_deref(),
        }
    }

    fn set_error(&mut self, message: String) {
        if let OrderDialog::ConfirmDelete { error, .. } | OrderDialog::Edit { error, .. } = self {
            *error = Some(message);
        }
    }
}

/// One rendered row of the order table.
#[derive(Debug, Clone, Copy)]
pub struct OrderRow<'a> {
    pub order: &'a Order,
    pub expanded: bool,
}

impl OrderRow<'_> {
    pub fn indicator(&self) -> StatusIndicator {
        self.order.status().indicator()
    }

    pub fn created_at(&self) -> String {
        self.order.timestamp.display()
    }

    /// `Invalid Date` when the order has not been processed.
    pub fn processed_at(&self) -> String {
        self.order
            .processed_at
            .as_ref()
            .map_or_else(|| crate::types::OrderTimestamp::INVALID.to_string(), |ts| ts.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderListState {
    page: ListPage<Order>,
    expanded: HashSet<String>,
    dialog: OrderDialog,
    banner: Option<String>,
}

impl OrderListState {
    pub fn load<T: Transport>(dashboard: &Dashboard<T>) -> Self {
        let mut state = Self::default();
        state.reload(dashboard);
        state
    }

    /// Full re-fetch. Expansion state survives only for orders still listed.
    pub fn reload<T: Transport>(&mut self, dashboard: &Dashboard<T>) {
        self.page = ListPage::load_orders(dashboard);
        let listed: HashSet<&str> = self.page.items().iter().map(|o| o.id.as_str()).collect();
        self.expanded.retain(|id| listed.contains(id.as_str()));
    }

    pub fn page(&self) -> &ListPage<Order> {
        &self.page
    }

    pub fn rows(&self) -> impl Iterator<Item = OrderRow<'_>> {
        self.page.items().iter().map(|order| OrderRow {
            order,
            expanded: self.expanded.contains(&order.id),
        })
    }

    pub fn dialog(&self) -> &OrderDialog {
        &self.dialog
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Flip a row between collapsed and expanded; returns the new state.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    fn find(&self, id: &str) -> Option<Order> {
        self.page.items().iter().find(|o| o.id == id).cloned()
    }

    /// Open the delete confirmation for a listed order.
    pub fn request_delete(&mut self, id: &str) -> bool {
        let Some(order) = self.find(id) else {
            return false;
        };
        self.dialog = OrderDialog::ConfirmDelete { order, error: None };
        true
    }

    /// Open the edit dialog for a listed order.
    pub fn request_edit(&mut self, id: &str) -> bool {
        let Some(order) = self.find(id) else {
            return false;
        };
        let draft = OrderEditDraft::for_order(&order);
        self.dialog = OrderDialog::Edit {
            order,
            draft,
            error: None,
        };
        true
    }

    pub fn set_draft_status(&mut self, status: OrderStatus) {
        if let OrderDialog::Edit { draft, .. } = &mut self.dialog {
            draft.status = status;
        }
    }

    pub fn set_draft_notes(&mut self, notes: &str) {
        if let OrderDialog::Edit { draft, .. } = &mut self.dialog {
            draft.notes = notes.to_string();
        }
    }

    /// Close whichever dialog is open, discarding its error.
    pub fn cancel_dialog(&mut self) {
        self.dialog = OrderDialog::Closed;
    }

    /// Confirm the open dialog. Returns `true` when the mutation succeeded
    /// and the list was re-fetched.
    pub fn confirm<T: Transport>(&mut self, dashboard: &Dashboard<T>) -> bool {
        let result = match &self.dialog {
            OrderDialog::Closed => return false,
            OrderDialog::ConfirmDelete { order, .. } => dashboard.delete_order(&order.id),
            OrderDialog::Edit { order, draft, .. } => dashboard.update_order(&order.id, &draft.to_update()),
        };

        match result {
            Ok(receipt) => {
                debug!(?receipt, "order mutation confirmed");
                self.dialog = OrderDialog::Closed;
                self.reload(dashboard);
                true
            }
            Err(e) => {
                warn!(operation = %e.operation(), error = %e, "order mutation failed");
                let message = e.to_string();
                self.dialog.set_error(message.clone());
                self.banner = Some(message);
                false
            }
        }
    }
}
