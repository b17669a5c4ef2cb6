//! Money calculation utilities
//!
//! Totals are computed with `Decimal` internally and converted to `f64` at
//! the edges, rounded to 2 decimal places half-up. This is the sole pricing
//! algorithm: no tax, no discounts, and no combo decomposition (a combo
//! carries its own flat price).

use rust_decimal::prelude::*;
use shared::OrderItem;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default()
}

/// Sum of price x quantity over all line items
pub fn calculate_total(items: &[OrderItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();
    total
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Product;

    fn item(price: f64, quantity: i32) -> OrderItem {
        let product = Product::new("1", "Test", "0001", price, "Test");
        let mut item = OrderItem::from_product(&product);
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_empty_items_total_zero() {
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn test_total_sums_extended_prices() {
        let items = vec![item(149.0, 2), item(60.0, 1)];
        assert_eq!(calculate_total(&items), 358.0);
    }

    #[test]
    fn test_total_is_exact_for_decimal_prices() {
        // 0.1 + 0.2 style accumulation must not drift
        let items = vec![item(0.1, 1), item(0.2, 1)];
        assert_eq!(calculate_total(&items), 0.3);
    }

    #[test]
    fn test_combo_price_is_flat() {
        let mut combo = Product::new("6", "Super Saver Combo", "CB-5001", 249.0, "Combos");
        combo.is_combo = true;
        combo.combo_items = vec!["1".into(), "3".into(), "4".into()];

        let mut line = OrderItem::from_product(&combo);
        line.quantity = 2;

        assert_eq!(calculate_total(std::slice::from_ref(&line)), 498.0);
    }
}
