//! Application state
//!
//! Composes the stores, routes between views, and holds destructive actions
//! behind an explicit confirmation step. The stores never know about views;
//! transitions happen here based on whether an operation reported doing
//! anything.

use crate::catalog::CatalogStore;
use crate::core::config::Config;
use crate::sessions::{CounterStorage, SessionStore, StorageResult};

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Order builder: catalog + active cart
    #[default]
    Order,
    /// Delivery queue
    Queue,
    /// Billing entry for the staged order
    Billing,
    /// Catalog editor
    Management,
    /// Sales history and analytics
    History,
    /// Confirmation screen after queueing
    Success,
}

/// Destructive actions held until the user confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DiscardDraft(String),
    CancelOrder(String),
    ClearHistory,
}

impl ConfirmAction {
    /// Prompt shown before the action runs
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DiscardDraft(_) => {
                "Are you sure you want to discard this draft? All selected items will be lost."
            }
            Self::CancelOrder(_) => "Permanently cancel this order? This cannot be undone.",
            Self::ClearHistory => "DANGER: Clear all sales history and analysis data permanently?",
        }
    }
}

/// Application root: stores plus view routing
pub struct App {
    pub catalog: CatalogStore,
    pub sessions: SessionStore,
    view: AppView,
    pending_confirm: Option<ConfirmAction>,
}

impl App {
    /// Open storage under the configured work directory and rehydrate
    pub fn initialize(config: &Config) -> StorageResult<Self> {
        let storage = CounterStorage::open(config.db_path())?;
        Self::with_storage(storage)
    }

    /// Build the app over an already-open storage handle
    pub fn with_storage(storage: CounterStorage) -> StorageResult<Self> {
        Ok(Self {
            catalog: CatalogStore::load(storage.clone())?,
            sessions: SessionStore::load(storage)?,
            view: AppView::default(),
            pending_confirm: None,
        })
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    /// Free navigation between top-level views
    pub fn set_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Leave the success screen and start fresh in the order builder
    pub fn new_order(&mut self) {
        self.sessions.clear_last_confirmed();
        self.view = AppView::Order;
    }

    // ========== Lifecycle intents with view transitions ==========

    /// Stage the active session and move to billing; stays put when the
    /// session is missing or empty
    pub fn confirm_order(&mut self) -> StorageResult<()> {
        if self.sessions.confirm_order()?.is_some() {
            self.view = AppView::Billing;
        }
        Ok(())
    }

    /// Queue the staged order and show the success screen
    pub fn send_to_queue(&mut self, name: &str, phone: &str) -> StorageResult<()> {
        if self.sessions.send_to_queue(name, phone)? {
            self.view = AppView::Success;
        }
        Ok(())
    }

    /// Hold the staged order and return to the order builder
    pub fn hold_from_billing(&mut self, name: &str, phone: &str) -> StorageResult<()> {
        if self.sessions.hold_from_billing(name, phone)? {
            self.view = AppView::Order;
        }
        Ok(())
    }

    /// Bring a queued order back into the builder
    pub fn resume_order(&mut self, id: &str) -> StorageResult<()> {
        if self.sessions.resume_order(id)? {
            self.view = AppView::Order;
        }
        Ok(())
    }

    // ========== Destructive-action confirmation ==========

    pub fn request_discard_draft(&mut self, id: impl Into<String>) {
        self.pending_confirm = Some(ConfirmAction::DiscardDraft(id.into()));
    }

    pub fn request_cancel_order(&mut self, id: impl Into<String>) {
        self.pending_confirm = Some(ConfirmAction::CancelOrder(id.into()));
    }

    pub fn request_clear_history(&mut self) {
        self.pending_confirm = Some(ConfirmAction::ClearHistory);
    }

    pub fn pending_confirm(&self) -> Option<&ConfirmAction> {
        self.pending_confirm.as_ref()
    }

    /// Execute the held action
    pub fn confirm_pending(&mut self) -> StorageResult<()> {
        let Some(action) = self.pending_confirm.take() else {
            return Ok(());
        };
        match action {
            ConfirmAction::DiscardDraft(id) => {
                self.sessions.delete_draft(&id)?;
            }
            ConfirmAction::CancelOrder(id) => {
                self.sessions.cancel_order(&id)?;
            }
            ConfirmAction::ClearHistory => self.sessions.clear_history()?,
        }
        Ok(())
    }

    /// Decline the held action, leaving all state untouched
    pub fn dismiss_pending(&mut self) {
        self.pending_confirm = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SessionStatus;

    fn app() -> App {
        App::with_storage(CounterStorage::open_in_memory().unwrap()).unwrap()
    }

    fn first_product(app: &App) -> shared::Product {
        app.catalog.products()[0].clone()
    }

    #[test]
    fn test_confirm_empty_keeps_view() {
        let mut app = app();
        app.confirm_order().unwrap();
        assert_eq!(app.view(), AppView::Order);
    }

    #[test]
    fn test_confirm_then_queue_walks_views() {
        let mut app = app();
        let product = first_product(&app);
        app.sessions.add_to_cart(&product).unwrap();

        app.confirm_order().unwrap();
        assert_eq!(app.view(), AppView::Billing);

        app.send_to_queue("Alice", "").unwrap();
        assert_eq!(app.view(), AppView::Success);
        assert_eq!(app.sessions.last_confirmed().unwrap().customer_name, "Alice");

        app.new_order();
        assert_eq!(app.view(), AppView::Order);
        assert!(app.sessions.last_confirmed().is_none());
    }

    #[test]
    fn test_hold_from_billing_returns_to_builder() {
        let mut app = app();
        let product = first_product(&app);
        app.sessions.add_to_cart(&product).unwrap();
        app.confirm_order().unwrap();

        app.hold_from_billing("", "").unwrap();
        assert_eq!(app.view(), AppView::Order);
        assert_eq!(app.sessions.pending_orders()[0].status, SessionStatus::Hold);
    }

    #[test]
    fn test_resume_switches_to_builder() {
        let mut app = app();
        let product = first_product(&app);
        app.sessions.add_to_cart(&product).unwrap();
        app.sessions.hold_order().unwrap();
        let id = app.sessions.pending_orders()[0].id.clone();

        app.set_view(AppView::Queue);
        app.resume_order(&id).unwrap();
        assert_eq!(app.view(), AppView::Order);

        app.set_view(AppView::Queue);
        app.resume_order("ZZZZZZ").unwrap();
        assert_eq!(app.view(), AppView::Queue);
    }

    #[test]
    fn test_dismiss_leaves_state_untouched() {
        let mut app = app();
        let product = first_product(&app);
        app.sessions.add_to_cart(&product).unwrap();
        app.sessions.hold_order().unwrap();
        let id = app.sessions.pending_orders()[0].id.clone();

        app.request_cancel_order(id);
        assert!(app.pending_confirm().is_some());
        app.dismiss_pending();

        assert!(app.pending_confirm().is_none());
        assert_eq!(app.sessions.pending_orders().len(), 1);
        assert!(app.sessions.history().is_empty());
    }

    #[test]
    fn test_confirm_pending_executes_action() {
        let mut app = app();
        let product = first_product(&app);
        app.sessions.add_to_cart(&product).unwrap();
        app.sessions.hold_order().unwrap();
        let id = app.sessions.pending_orders()[0].id.clone();

        app.request_cancel_order(id);
        app.confirm_pending().unwrap();

        assert!(app.sessions.pending_orders().is_empty());
        assert_eq!(app.sessions.history()[0].status, SessionStatus::Cancelled);
    }
}
