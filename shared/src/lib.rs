//! Shared domain types for the Crunchy Counter POS
//!
//! Common types used by the counter application and its tests: the catalog
//! product model, order sessions with their lifecycle states, and identifier
//! generation.

pub mod catalog;
pub mod ids;
pub mod session;

// Re-exports
pub use catalog::{Product, ProductId};
pub use ids::{generate_order_id, generate_product_id};
pub use serde::{Deserialize, Serialize};
pub use session::{OrderItem, OrderSession, SessionStatus};
