//! Derived view computations
//!
//! Presentation-side filtering, sorting, and aggregation. Everything here is
//! a pure function over the store collections; nothing mutates state.

pub mod billing;
pub mod history;
pub mod management;
pub mod order_screen;
pub mod queue;

pub use billing::{order_codes, validate_customer_name};
pub use history::{HistoryFilter, SalesStats, filter_history, sales_stats};
pub use management::{component_candidates, toggle_component};
pub use order_screen::{CatalogFilter, SearchMode, categories, filter_catalog};
pub use queue::time_ago;
