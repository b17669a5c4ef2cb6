//! End-to-end session lifecycle tests over real on-disk storage

use crunchy_counter::core::{App, AppView};
use crunchy_counter::sessions::{CounterStorage, SessionStore, calculate_total};
use crunchy_counter::views::{HistoryFilter, filter_history, sales_stats};
use shared::{Product, SessionStatus};

fn open_app(dir: &tempfile::TempDir) -> App {
    let storage = CounterStorage::open(dir.path().join("counter.redb")).unwrap();
    App::with_storage(storage).unwrap()
}

fn product_a() -> Product {
    Product::new("A", "Product A", "1000001", 100.0, "Test")
}

fn product_b() -> Product {
    Product::new("B", "Product B", "1000002", 60.0, "Test")
}

#[test]
fn adding_a_product_twice_merges_the_line_item() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.add_to_cart(&product_a()).unwrap();

    let draft = app.sessions.active_session().unwrap();
    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.items[0].quantity, 2);
    assert_eq!(calculate_total(&draft.items), 200.0);
}

#[test]
fn hold_and_resume_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.add_to_cart(&product_b()).unwrap();
    let draft_id = app.sessions.active_id().unwrap().to_string();
    let items_before = app.sessions.active_session().unwrap().items.clone();

    assert!(app.sessions.hold_order().unwrap());
    assert!(app.sessions.drafts().iter().all(|d| d.id != draft_id));
    assert_eq!(app.sessions.pending_orders().len(), 1);
    assert_eq!(app.sessions.pending_orders()[0].status, SessionStatus::Hold);

    app.resume_order(&draft_id).unwrap();
    assert_eq!(app.view(), AppView::Order);
    assert!(app.sessions.pending_orders().is_empty());
    let resumed = &app.sessions.drafts()[0];
    assert_eq!(resumed.status, SessionStatus::Draft);
    assert_eq!(resumed.items, items_before);
}

#[test]
fn confirm_bill_and_queue_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    app.sessions.add_to_cart(&product_a()).unwrap();
    app.confirm_order().unwrap();
    assert_eq!(app.view(), AppView::Billing);
    assert!(app.sessions.staged_order().is_some());

    app.send_to_queue("Alice", "").unwrap();
    assert_eq!(app.view(), AppView::Success);

    assert_eq!(app.sessions.pending_orders().len(), 1);
    let queued = &app.sessions.pending_orders()[0];
    assert_eq!(queued.status, SessionStatus::Pending);
    assert_eq!(queued.customer_name, "Alice");
    assert_eq!(app.sessions.last_confirmed().unwrap().id, queued.id);
}

#[test]
fn deliver_moves_to_history_with_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.hold_order().unwrap();
    let id = app.sessions.pending_orders()[0].id.clone();

    assert!(app.sessions.deliver_order(&id).unwrap());
    assert!(app.sessions.pending_orders().is_empty());
    let delivered = &app.sessions.history()[0];
    assert_eq!(delivered.id, id);
    assert_eq!(delivered.status, SessionStatus::Delivered);
    assert!(delivered.delivered_at.is_some());

    // unknown ids no-op
    assert!(!app.sessions.deliver_order("ZZZZZZ").unwrap());
}

#[test]
fn queueing_twice_keeps_one_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.hold_order().unwrap();
    let id = app.sessions.pending_orders()[0].id.clone();

    // resume, re-hold: still exactly one entry
    app.sessions.resume_order(&id).unwrap();
    app.sessions.hold_order().unwrap();
    assert_eq!(app.sessions.pending_orders().len(), 1);

    // resume, confirm, queue: still exactly one entry, now PENDING
    app.sessions.resume_order(&id).unwrap();
    app.confirm_order().unwrap();
    app.send_to_queue("", "").unwrap();
    assert_eq!(app.sessions.pending_orders().len(), 1);
    assert_eq!(app.sessions.pending_orders()[0].status, SessionStatus::Pending);
}

#[test]
fn analytics_exclude_cancelled_and_reset_on_clear() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    // one delivered order worth 200
    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.add_to_cart(&product_a()).unwrap();
    app.sessions.hold_order().unwrap();
    let delivered_id = app.sessions.pending_orders()[0].id.clone();
    app.sessions.deliver_order(&delivered_id).unwrap();

    // one cancelled order that must not count
    app.sessions.add_to_cart(&product_b()).unwrap();
    app.sessions.hold_order().unwrap();
    let cancelled_id = app.sessions.pending_orders()[0].id.clone();
    app.request_cancel_order(cancelled_id);
    app.confirm_pending().unwrap();

    let filtered = filter_history(app.sessions.history(), &HistoryFilter::default());
    assert_eq!(filtered.len(), 2);
    let stats = sales_stats(&filtered);
    assert_eq!(stats.total_sales, 200.0);
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.average_order_value, 200.0);

    app.request_clear_history();
    app.confirm_pending().unwrap();
    let stats = sales_stats(&filter_history(app.sessions.history(), &HistoryFilter::default()));
    assert_eq!(stats.total_sales, 0.0);
    assert_eq!(stats.average_order_value, 0.0);
}

#[test]
fn collections_rehydrate_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("counter.redb");
    let queued_id;
    let draft_id;

    {
        let storage = CounterStorage::open(&db_path).unwrap();
        let mut app = App::with_storage(storage).unwrap();

        app.sessions.add_to_cart(&product_a()).unwrap();
        app.sessions.hold_order().unwrap();
        queued_id = app.sessions.pending_orders()[0].id.clone();

        app.sessions.add_to_cart(&product_b()).unwrap();
        draft_id = app.sessions.active_id().unwrap().to_string();
    }

    let storage = CounterStorage::open(&db_path).unwrap();
    let app = App::with_storage(storage).unwrap();

    assert_eq!(app.sessions.pending_orders().len(), 1);
    assert_eq!(app.sessions.pending_orders()[0].id, queued_id);
    assert_eq!(app.sessions.drafts().len(), 1);
    assert_eq!(app.sessions.drafts()[0].id, draft_id);
    // the active reference is UI state, not persisted
    assert!(app.sessions.active_id().is_none());
    // catalog was seeded on first open and reloaded from storage
    assert_eq!(app.catalog.products().len(), 30);
}

#[test]
fn staged_order_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("counter.redb");

    {
        let storage = CounterStorage::open(&db_path).unwrap();
        let mut app = App::with_storage(storage).unwrap();
        app.sessions.add_to_cart(&product_a()).unwrap();
        app.confirm_order().unwrap();
        assert!(app.sessions.staged_order().is_some());
    }

    let storage = CounterStorage::open(&db_path).unwrap();
    let store = SessionStore::load(storage).unwrap();

    // the staged copy lived only in memory; drafts were already detached
    assert!(store.staged_order().is_none());
    assert!(store.drafts().is_empty());
    assert!(store.pending_orders().is_empty());
}

#[test]
fn catalog_edits_do_not_rewrite_order_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir);

    let original = app.catalog.products()[0].clone();
    app.sessions.add_to_cart(&original).unwrap();
    app.sessions.hold_order().unwrap();

    let mut repriced = original.clone();
    repriced.price = original.price + 500.0;
    app.catalog.update_product(repriced).unwrap();

    let snapshot = &app.sessions.pending_orders()[0].items[0];
    assert_eq!(snapshot.price, original.price);
}
