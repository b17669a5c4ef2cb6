//! Order session model and lifecycle states
//!
//! A session is identified by its id across every collection (drafts, pending
//! queue, history); at most one collection holds a given id at a time. Line
//! items are product snapshots: later catalog edits never change them.

use crate::catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Session status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Being assembled in the order builder
    #[default]
    Draft,
    /// Billed and awaiting delivery
    Pending,
    /// Set aside for later resumption, visible in the queue
    Hold,
    /// Delivered (terminal)
    Delivered,
    /// Cancelled (terminal)
    Cancelled,
}

impl SessionStatus {
    /// Delivered or cancelled - the session lives in history
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Pending or held - the session lives in the operational queue
    pub fn is_queued(self) -> bool {
        matches!(self, Self::Pending | Self::Hold)
    }
}

/// Order line item - a product snapshot plus quantity
///
/// Quantity is >= 1 while the item is present; reaching 0 removes the line
/// item, it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product id at snapshot time
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub is_combo: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combo_items: Vec<ProductId>,
    pub quantity: i32,
}

fn default_true() -> bool {
    true
}

impl OrderItem {
    /// Snapshot a catalog product as a new line item at quantity 1
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            code: product.code.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            available: product.available,
            is_combo: product.is_combo,
            combo_items: product.combo_items.clone(),
            quantity: 1,
        }
    }

    /// price x quantity for this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSession {
    /// Short random alphanumeric token
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    /// Creation / last-held time, Unix millis
    pub timestamp: i64,
    pub status: SessionStatus,
    /// Stamped exactly once at the delivery transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<i64>,
    /// Stamped exactly once at the cancel transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<i64>,
}

impl OrderSession {
    /// Create a new empty draft session
    pub fn new(id: String) -> Self {
        Self {
            id,
            customer_name: String::new(),
            customer_phone: None,
            items: Vec::new(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            status: SessionStatus::Draft,
            delivered_at: None,
            cancelled_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, product_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Quantity of the given product in this session, 0 when absent
    pub fn item_quantity(&self, product_id: &str) -> i32 {
        self.find_item(product_id).map_or(0, |item| item.quantity)
    }

    /// Total number of units across all line items
    pub fn unit_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
