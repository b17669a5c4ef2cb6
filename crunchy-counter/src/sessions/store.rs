//! SessionStore - order session lifecycle and cart mutation
//!
//! Owns the three session collections (drafts, pending queue, history), the
//! active-session reference, and the ephemeral billing staging slot. Every
//! mutating operation ends with an explicit mirror of the collections it
//! touched; nothing else writes to storage.
//!
//! # State machine
//!
//! ```text
//! (none) --add_to_cart(first item)--> DRAFT
//! DRAFT --add_to_cart/update_quantity/remove_item--> DRAFT
//! DRAFT --confirm_order--> staged (billing slot, outside all collections)
//! staged --send_to_queue--> PENDING
//! staged --hold_from_billing--> HOLD
//! DRAFT --hold_order--> HOLD
//! HOLD --resume_order--> DRAFT
//! PENDING/HOLD --deliver_order--> DELIVERED (terminal)
//! PENDING/HOLD --cancel_order--> CANCELLED (terminal)
//! ```
//!
//! Guard conditions (no active session, empty cart, unknown id) silently
//! no-op; the return value says whether anything happened so the front-end
//! can skip its view transition. Storage failures are real errors.

use super::storage::{CounterStorage, StorageResult};
use shared::{OrderItem, OrderSession, Product, SessionStatus, generate_order_id};

/// Session store - the single owner of all order session state
pub struct SessionStore {
    storage: CounterStorage,
    drafts: Vec<OrderSession>,
    pending: Vec<OrderSession>,
    completed: Vec<OrderSession>,
    /// Id of the session currently targeted by cart mutations
    active_id: Option<String>,
    /// Billing staging slot: removed from drafts, not yet in any collection.
    /// Never persisted.
    active_order: Option<OrderSession>,
    /// Result of the most recent send_to_queue, for the success screen
    last_confirmed: Option<OrderSession>,
}

impl SessionStore {
    /// Rehydrate the session collections from storage
    pub fn load(storage: CounterStorage) -> StorageResult<Self> {
        let drafts = storage.load_drafts()?.unwrap_or_default();
        let pending = storage.load_pending()?.unwrap_or_default();
        let completed = storage.load_history()?.unwrap_or_default();
        tracing::info!(
            drafts = drafts.len(),
            pending = pending.len(),
            history = completed.len(),
            "Session store loaded"
        );
        Ok(Self {
            storage,
            drafts,
            pending,
            completed,
            active_id: None,
            active_order: None,
            last_confirmed: None,
        })
    }

    // ========== Accessors ==========

    pub fn drafts(&self) -> &[OrderSession] {
        &self.drafts
    }

    pub fn pending_orders(&self) -> &[OrderSession] {
        &self.pending
    }

    pub fn history(&self) -> &[OrderSession] {
        &self.completed
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The staged order awaiting billing, if any
    pub fn staged_order(&self) -> Option<&OrderSession> {
        self.active_order.as_ref()
    }

    pub fn last_confirmed(&self) -> Option<&OrderSession> {
        self.last_confirmed.as_ref()
    }

    pub fn clear_last_confirmed(&mut self) {
        self.last_confirmed = None;
    }

    /// Make a session the target of cart mutations (or clear the target)
    pub fn set_active(&mut self, id: Option<String>) {
        self.active_id = id;
    }

    /// The active session, wherever it lives. A held order opened from the
    /// order screen resolves here too, which is what makes its cart directly
    /// editable.
    pub fn active_session(&self) -> Option<&OrderSession> {
        let id = self.active_id.as_deref()?;
        self.drafts
            .iter()
            .find(|d| d.id == id)
            .or_else(|| self.pending.iter().find(|o| o.id == id))
    }

    /// Apply `mutate` to the active session in whichever collection holds it,
    /// then mirror that collection
    fn mutate_active(&mut self, mut mutate: impl FnMut(&mut OrderSession)) -> StorageResult<bool> {
        let Some(id) = self.active_id.clone() else {
            return Ok(false);
        };
        if let Some(draft) = self.drafts.iter_mut().find(|d| d.id == id) {
            mutate(draft);
            self.storage.save_drafts(&self.drafts)?;
            return Ok(true);
        }
        if let Some(order) = self.pending.iter_mut().find(|o| o.id == id) {
            mutate(order);
            self.storage.save_pending(&self.pending)?;
            return Ok(true);
        }
        Ok(false)
    }

    // ========== Cart edits ==========

    /// Add one unit of a product to the active session, creating a fresh
    /// draft when nothing is active
    pub fn add_to_cart(&mut self, product: &Product) -> StorageResult<()> {
        if self.active_id.is_none() {
            let mut session = OrderSession::new(generate_order_id());
            session.items.push(OrderItem::from_product(product));
            tracing::debug!(order_id = %session.id, product = %product.name, "New draft started");
            self.active_id = Some(session.id.clone());
            self.drafts.push(session);
            self.storage.save_drafts(&self.drafts)?;
            return Ok(());
        }

        self.mutate_active(|session| {
            if let Some(item) = session.items.iter_mut().find(|i| i.id == product.id) {
                item.quantity += 1;
            } else {
                session.items.push(OrderItem::from_product(product));
            }
        })?;
        Ok(())
    }

    /// Add `delta` to a line item's quantity, clamped at 0; reaching 0
    /// removes the line item
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) -> StorageResult<()> {
        self.mutate_active(|session| {
            if let Some(item) = session.items.iter_mut().find(|i| i.id == product_id) {
                item.quantity = (item.quantity + delta).max(0);
            }
            session.items.retain(|i| i.quantity > 0);
        })?;
        Ok(())
    }

    /// Drop a line item from the active session unconditionally
    pub fn remove_item(&mut self, product_id: &str) -> StorageResult<()> {
        self.mutate_active(|session| {
            session.items.retain(|i| i.id != product_id);
        })?;
        Ok(())
    }

    // ========== Draft management ==========

    /// Rename a draft in place
    pub fn update_draft_name(&mut self, id: &str, name: &str) -> StorageResult<()> {
        if let Some(draft) = self.drafts.iter_mut().find(|d| d.id == id) {
            draft.customer_name = name.to_string();
            self.storage.save_drafts(&self.drafts)?;
        }
        Ok(())
    }

    /// Remove a draft. Caller is responsible for user confirmation.
    pub fn delete_draft(&mut self, id: &str) -> StorageResult<bool> {
        let before = self.drafts.len();
        self.drafts.retain(|d| d.id != id);
        if self.drafts.len() == before {
            return Ok(false);
        }
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.storage.save_drafts(&self.drafts)?;
        tracing::info!(order_id = %id, "Draft discarded");
        Ok(true)
    }

    // ========== Lifecycle transitions ==========

    /// Stage the active session for billing. Returns the staged order, or
    /// `None` when nothing is active or the cart is empty.
    ///
    /// The staged copy leaves the draft list immediately; a held order stays
    /// in the queue until the billing step upserts it back by id.
    pub fn confirm_order(&mut self) -> StorageResult<Option<&OrderSession>> {
        let Some(current) = self.active_session().cloned() else {
            return Ok(None);
        };
        if current.items.is_empty() {
            return Ok(None);
        }

        let mut staged = current;
        staged.status = SessionStatus::Pending;

        if self.drafts.iter().any(|d| d.id == staged.id) {
            self.drafts.retain(|d| d.id != staged.id);
            self.storage.save_drafts(&self.drafts)?;
        }
        self.active_id = None;
        tracing::info!(order_id = %staged.id, total_units = staged.unit_count(), "Order staged for billing");
        self.active_order = Some(staged);
        Ok(self.active_order.as_ref())
    }

    /// Hold the active session directly from the order builder
    pub fn hold_order(&mut self) -> StorageResult<bool> {
        let Some(current) = self.active_session().cloned() else {
            return Ok(false);
        };
        if current.items.is_empty() {
            return Ok(false);
        }

        let mut held = current;
        held.status = SessionStatus::Hold;
        held.timestamp = chrono::Utc::now().timestamp_millis();
        let id = held.id.clone();

        self.upsert_pending(held);
        self.drafts.retain(|d| d.id != id);
        self.active_id = None;
        self.storage.save_pending(&self.pending)?;
        self.storage.save_drafts(&self.drafts)?;
        tracing::info!(order_id = %id, "Order held");
        Ok(true)
    }

    /// Queue the staged order as PENDING, recording it as last confirmed
    pub fn send_to_queue(&mut self, name: &str, phone: &str) -> StorageResult<bool> {
        let Some(mut order) = self.active_order.take() else {
            return Ok(false);
        };
        apply_billing_info(&mut order, name, phone);
        let id = order.id.clone();

        self.last_confirmed = Some(order.clone());
        self.upsert_pending(order);
        self.storage.save_pending(&self.pending)?;
        tracing::info!(order_id = %id, "Order queued");
        Ok(true)
    }

    /// Hold the staged order from the billing screen
    pub fn hold_from_billing(&mut self, name: &str, phone: &str) -> StorageResult<bool> {
        let Some(mut order) = self.active_order.take() else {
            return Ok(false);
        };
        apply_billing_info(&mut order, name, phone);
        order.status = SessionStatus::Hold;
        order.timestamp = chrono::Utc::now().timestamp_millis();
        let id = order.id.clone();

        self.upsert_pending(order);
        self.storage.save_pending(&self.pending)?;
        tracing::info!(order_id = %id, "Order held from billing");
        Ok(true)
    }

    /// Move a queued session back to the draft list for editing
    pub fn resume_order(&mut self, id: &str) -> StorageResult<bool> {
        let Some(pos) = self.pending.iter().position(|o| o.id == id) else {
            return Ok(false);
        };

        let mut draft = self.pending.remove(pos);
        draft.status = SessionStatus::Draft;
        self.drafts.insert(0, draft);
        self.active_id = Some(id.to_string());
        self.storage.save_drafts(&self.drafts)?;
        self.storage.save_pending(&self.pending)?;
        tracing::info!(order_id = %id, "Order resumed for editing");
        Ok(true)
    }

    /// Move a queued session to history as DELIVERED
    pub fn deliver_order(&mut self, id: &str) -> StorageResult<bool> {
        self.complete_order(id, SessionStatus::Delivered)
    }

    /// Move a queued session to history as CANCELLED. Caller is responsible
    /// for user confirmation.
    pub fn cancel_order(&mut self, id: &str) -> StorageResult<bool> {
        self.complete_order(id, SessionStatus::Cancelled)
    }

    fn complete_order(&mut self, id: &str, status: SessionStatus) -> StorageResult<bool> {
        let Some(pos) = self.pending.iter().position(|o| o.id == id) else {
            return Ok(false);
        };

        let mut order = self.pending.remove(pos);
        let now = chrono::Utc::now().timestamp_millis();
        order.status = status;
        match status {
            SessionStatus::Delivered => order.delivered_at = Some(now),
            SessionStatus::Cancelled => order.cancelled_at = Some(now),
            _ => {}
        }
        self.completed.insert(0, order);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.storage.save_pending(&self.pending)?;
        self.storage.save_history(&self.completed)?;
        tracing::info!(order_id = %id, status = ?status, "Order completed");
        Ok(true)
    }

    /// Empty the history collection. Irreversible; caller is responsible for
    /// user confirmation.
    pub fn clear_history(&mut self) -> StorageResult<()> {
        self.completed.clear();
        self.storage.save_history(&self.completed)?;
        tracing::warn!("Sales history cleared");
        Ok(())
    }

    /// Upsert by id: a re-held order updates in place, a new one goes to the
    /// front (most recent first)
    fn upsert_pending(&mut self, session: OrderSession) {
        if let Some(existing) = self.pending.iter_mut().find(|o| o.id == session.id) {
            *existing = session;
        } else {
            self.pending.insert(0, session);
        }
    }
}

/// Apply trimmed billing overrides, keeping the existing value when the
/// override is blank
fn apply_billing_info(session: &mut OrderSession, name: &str, phone: &str) {
    let name = name.trim();
    if !name.is_empty() {
        session.customer_name = name.to_string();
    }
    let phone = phone.trim();
    if !phone.is_empty() {
        session.customer_phone = Some(phone.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::money::calculate_total;

    fn store() -> SessionStore {
        SessionStore::load(CounterStorage::open_in_memory().unwrap()).unwrap()
    }

    fn burger() -> Product {
        Product::new("1", "Zinger Burger", "1066708", 100.0, "Burgers")
    }

    fn fries() -> Product {
        Product::new("3", "French Fries (Large)", "3399002", 99.0, "Sides")
    }

    #[test]
    fn test_first_add_creates_active_draft() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();

        assert_eq!(store.drafts().len(), 1);
        let draft = store.active_session().unwrap();
        assert_eq!(draft.status, SessionStatus::Draft);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn test_adding_same_product_increments_quantity() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.add_to_cart(&burger()).unwrap();

        let draft = store.active_session().unwrap();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(calculate_total(&draft.items), 200.0);
    }

    #[test]
    fn test_update_quantity_clamps_and_removes_at_zero() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.add_to_cart(&fries()).unwrap();

        store.update_quantity("1", 3).unwrap();
        assert_eq!(store.active_session().unwrap().item_quantity("1"), 4);

        store.update_quantity("1", -10).unwrap();
        let draft = store.active_session().unwrap();
        assert!(draft.find_item("1").is_none());
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_cart_edits_without_active_session_are_noops() {
        let mut store = store();
        store.update_quantity("1", 1).unwrap();
        store.remove_item("1").unwrap();

        assert!(store.drafts().is_empty());
        assert!(store.pending_orders().is_empty());
    }

    #[test]
    fn test_confirm_requires_nonempty_cart() {
        let mut store = store();
        assert!(store.confirm_order().unwrap().is_none());

        store.add_to_cart(&burger()).unwrap();
        store.remove_item("1").unwrap();
        assert!(store.confirm_order().unwrap().is_none());
        assert!(store.staged_order().is_none());
        // the emptied draft stays listed until explicitly deleted
        assert_eq!(store.drafts().len(), 1);
    }

    #[test]
    fn test_confirm_stages_and_detaches_from_drafts() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();

        let staged = store.confirm_order().unwrap().unwrap();
        assert_eq!(staged.status, SessionStatus::Pending);

        assert!(store.drafts().is_empty());
        assert!(store.pending_orders().is_empty());
        assert!(store.active_id().is_none());
        assert!(store.staged_order().is_some());
    }

    #[test]
    fn test_hold_is_upsert_not_append() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        assert!(store.hold_order().unwrap());
        let id = store.pending_orders()[0].id.clone();

        assert!(store.resume_order(&id).unwrap());
        store.add_to_cart(&fries()).unwrap();
        assert!(store.hold_order().unwrap());

        assert_eq!(store.pending_orders().len(), 1);
        assert_eq!(store.pending_orders()[0].items.len(), 2);
        assert_eq!(store.pending_orders()[0].status, SessionStatus::Hold);
    }

    #[test]
    fn test_hold_noop_on_empty_or_missing() {
        let mut store = store();
        assert!(!store.hold_order().unwrap());

        store.add_to_cart(&burger()).unwrap();
        store.update_quantity("1", -1).unwrap();
        assert!(!store.hold_order().unwrap());
        assert!(store.pending_orders().is_empty());
    }

    #[test]
    fn test_resume_restores_draft_with_identical_items() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.add_to_cart(&fries()).unwrap();
        store.hold_order().unwrap();
        let held = store.pending_orders()[0].clone();

        assert!(store.resume_order(&held.id).unwrap());
        assert!(store.pending_orders().is_empty());
        let draft = &store.drafts()[0];
        assert_eq!(draft.status, SessionStatus::Draft);
        assert_eq!(draft.items, held.items);
        assert_eq!(store.active_id(), Some(held.id.as_str()));
    }

    #[test]
    fn test_resume_unknown_id_noop() {
        let mut store = store();
        assert!(!store.resume_order("ZZZZZZ").unwrap());
    }

    #[test]
    fn test_send_to_queue_applies_overrides_and_upserts() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.confirm_order().unwrap();

        assert!(store.send_to_queue("Alice", "").unwrap());
        assert_eq!(store.pending_orders().len(), 1);
        let queued = &store.pending_orders()[0];
        assert_eq!(queued.status, SessionStatus::Pending);
        assert_eq!(queued.customer_name, "Alice");
        assert!(queued.customer_phone.is_none());
        assert_eq!(store.last_confirmed().unwrap().id, queued.id);

        // second send without a staged order is a no-op
        assert!(!store.send_to_queue("Bob", "").unwrap());
        assert_eq!(store.pending_orders().len(), 1);
    }

    #[test]
    fn test_blank_override_keeps_existing_name() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        let id = store.active_id().unwrap().to_string();
        store.update_draft_name(&id, "Walk-in").unwrap();

        store.confirm_order().unwrap();
        store.send_to_queue("   ", "555-0199").unwrap();

        let queued = &store.pending_orders()[0];
        assert_eq!(queued.customer_name, "Walk-in");
        assert_eq!(queued.customer_phone.as_deref(), Some("555-0199"));
    }

    #[test]
    fn test_confirming_held_order_then_queueing_updates_in_place() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let id = store.pending_orders()[0].id.clone();

        // edit the held cart directly from the order screen
        store.set_active(Some(id.clone()));
        store.add_to_cart(&fries()).unwrap();
        assert_eq!(store.pending_orders()[0].items.len(), 2);

        store.confirm_order().unwrap();
        // staging leaves the held entry queued until billing resolves it
        assert_eq!(store.pending_orders().len(), 1);

        store.send_to_queue("", "").unwrap();
        assert_eq!(store.pending_orders().len(), 1);
        assert_eq!(store.pending_orders()[0].status, SessionStatus::Pending);
    }

    #[test]
    fn test_hold_from_billing_updates_held_entry_in_place() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let id = store.pending_orders()[0].id.clone();

        store.set_active(Some(id.clone()));
        store.confirm_order().unwrap();
        assert!(store.hold_from_billing("Alice", "").unwrap());

        assert_eq!(store.pending_orders().len(), 1);
        assert_eq!(store.pending_orders()[0].id, id);
        assert_eq!(store.pending_orders()[0].status, SessionStatus::Hold);
        assert_eq!(store.pending_orders()[0].customer_name, "Alice");
    }

    #[test]
    fn test_deliver_stamps_and_moves_to_history() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let id = store.pending_orders()[0].id.clone();

        assert!(store.deliver_order(&id).unwrap());
        assert!(store.pending_orders().is_empty());
        let delivered = &store.history()[0];
        assert_eq!(delivered.status, SessionStatus::Delivered);
        assert!(delivered.delivered_at.is_some());
        assert!(delivered.cancelled_at.is_none());

        // second deliver is a no-op, the stamp is set exactly once
        assert!(!store.deliver_order(&id).unwrap());
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_cancel_stamps_cancelled_at() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let id = store.pending_orders()[0].id.clone();

        assert!(store.cancel_order(&id).unwrap());
        let cancelled = &store.history()[0];
        assert_eq!(cancelled.status, SessionStatus::Cancelled);
        assert!(cancelled.cancelled_at.is_some());
        assert!(cancelled.delivered_at.is_none());
    }

    #[test]
    fn test_completed_orders_prepend() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let first = store.pending_orders()[0].id.clone();

        store.add_to_cart(&fries()).unwrap();
        store.hold_order().unwrap();
        let second = store.pending_orders()[0].id.clone();

        store.deliver_order(&first).unwrap();
        store.deliver_order(&second).unwrap();

        assert_eq!(store.history()[0].id, second);
        assert_eq!(store.history()[1].id, first);
    }

    #[test]
    fn test_delete_draft_clears_active_reference() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        let id = store.active_id().unwrap().to_string();

        assert!(store.delete_draft(&id).unwrap());
        assert!(store.drafts().is_empty());
        assert!(store.active_id().is_none());
        assert!(!store.delete_draft(&id).unwrap());
    }

    #[test]
    fn test_clear_history_empties_collection() {
        let mut store = store();
        store.add_to_cart(&burger()).unwrap();
        store.hold_order().unwrap();
        let id = store.pending_orders()[0].id.clone();
        store.deliver_order(&id).unwrap();
        assert_eq!(store.history().len(), 1);

        store.clear_history().unwrap();
        assert!(store.history().is_empty());
    }
}
