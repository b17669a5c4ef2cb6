//! Receipt output

pub mod receipt;

pub use receipt::{ReceiptBuilder, render_receipt};
