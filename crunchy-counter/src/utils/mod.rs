//! Utility helpers

pub mod format;
pub mod logger;

pub use format::{format_currency, format_date, format_date_time, format_quantity, format_time};
