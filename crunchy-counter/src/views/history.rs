//! Sales history derived data: search, period filters, aggregates

use crate::sessions::money::calculate_total;
use chrono::{DateTime, Local};
use shared::{OrderSession, SessionStatus};

/// History search and period filter state; empty fields are inactive
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Free text matched against id, customer name, and phone
    pub query: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `MM` (01-12)
    pub month: String,
    /// `YYYY`
    pub year: String,
}

/// Aggregate figures over DELIVERED sessions only
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesStats {
    pub total_sales: f64,
    pub total_orders: usize,
    pub total_items: i32,
    /// Rounded to the nearest unit
    pub average_order_value: f64,
}

fn local_datetime(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(timestamp).map(|dt| dt.with_timezone(&Local))
}

/// Apply the history filter, keeping the collection's order
pub fn filter_history<'a>(
    orders: &'a [OrderSession],
    filter: &HistoryFilter,
) -> Vec<&'a OrderSession> {
    let query = filter.query.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            let matches_query = query.is_empty()
                || order.id.to_lowercase().contains(&query)
                || order.customer_name.to_lowercase().contains(&query)
                || order
                    .customer_phone
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&query);
            if !matches_query {
                return false;
            }

            let Some(dt) = local_datetime(order.timestamp) else {
                return filter.date.is_empty() && filter.month.is_empty() && filter.year.is_empty();
            };
            let matches_date =
                filter.date.is_empty() || dt.format("%Y-%m-%d").to_string() == filter.date;
            let matches_month =
                filter.month.is_empty() || dt.format("%m").to_string() == filter.month;
            let matches_year = filter.year.is_empty() || dt.format("%Y").to_string() == filter.year;
            matches_date && matches_month && matches_year
        })
        .collect()
}

/// Compute sales aggregates over the DELIVERED subset of `orders`.
/// Cancelled (and any non-terminal) sessions never enter the figures.
pub fn sales_stats(orders: &[&OrderSession]) -> SalesStats {
    let delivered: Vec<&&OrderSession> = orders
        .iter()
        .filter(|order| order.status == SessionStatus::Delivered)
        .collect();

    let total_sales: f64 = delivered
        .iter()
        .map(|order| calculate_total(&order.items))
        .sum();
    let total_items: i32 = delivered.iter().map(|order| order.unit_count()).sum();
    let average_order_value = if delivered.is_empty() {
        0.0
    } else {
        (total_sales / delivered.len() as f64).round()
    };

    SalesStats {
        total_sales,
        total_orders: delivered.len(),
        total_items,
        average_order_value,
    }
}
