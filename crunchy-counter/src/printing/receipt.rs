//! Plain-text receipt rendering
//!
//! Builds the human-readable order summary handed to the customer. Output is
//! fixed-width text; there are no printer control sequences.

use crate::sessions::money::calculate_total;
use crate::utils::format::{format_currency, format_date_time};
use shared::OrderSession;

/// Receipt width in characters (80mm thermal paper territory)
pub const RECEIPT_WIDTH: usize = 42;

const QTY_COL: usize = 5;
const PRICE_COL: usize = 11;

/// Line-oriented receipt builder
///
/// Provides centered headings, dashed rules, and left/right column layout
/// within a fixed character width.
pub struct ReceiptBuilder {
    buf: String,
    width: usize,
}

impl ReceiptBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(1024),
            width,
        }
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Dashed horizontal rule
    pub fn rule(&mut self) -> &mut Self {
        let dashes = "-".repeat(self.width);
        self.line(&dashes)
    }

    pub fn center(&mut self, s: &str) -> &mut Self {
        let s = truncate(s, self.width);
        let pad = self.width.saturating_sub(char_len(s)) / 2;
        let centered = format!("{}{}", " ".repeat(pad), s);
        self.line(&centered)
    }

    /// Left and right texts on one line, right-aligned to the width
    pub fn left_right(&mut self, left: &str, right: &str) -> &mut Self {
        let right = truncate(right, self.width);
        let left_room = self.width.saturating_sub(char_len(right) + 1);
        let left = truncate(left, left_room);
        let pad = self.width.saturating_sub(char_len(left) + char_len(right));
        let row = format!("{}{}{}", left, " ".repeat(pad), right);
        self.line(&row)
    }

    /// Item row: flexible name column, centered quantity, right-aligned price
    pub fn item_row(&mut self, name: &str, quantity: &str, price: &str) -> &mut Self {
        let name_room = self.width.saturating_sub(QTY_COL + PRICE_COL);
        let name = truncate(name, name_room);
        let row = format!(
            "{:<name_room$}{:^QTY_COL$}{:>PRICE_COL$}",
            name,
            truncate(quantity, QTY_COL),
            truncate(price, PRICE_COL),
        );
        self.line(row.trim_end())
    }

    pub fn build(self) -> String {
        self.buf
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Render the printable receipt for an order
pub fn render_receipt(order: &OrderSession) -> String {
    let mut receipt = ReceiptBuilder::new(RECEIPT_WIDTH);

    receipt.center("POPIAH KITCHEN");
    receipt.center("Order Management System v2.0");
    receipt.rule();

    receipt.left_right("REF:", &order.id);
    receipt.left_right("DATE:", &format_date_time(order.timestamp));
    let customer = if order.customer_name.is_empty() {
        "GUEST"
    } else {
        &order.customer_name
    };
    receipt.left_right("CUSTOMER:", customer);
    if let Some(phone) = &order.customer_phone {
        receipt.left_right("PHONE:", phone);
    }
    receipt.rule();

    receipt.item_row("ITEM", "QTY", "PRICE");
    for item in &order.items {
        receipt.item_row(
            &item.name,
            &item.quantity.to_string(),
            &format_currency(item.line_total()),
        );
    }
    receipt.rule();

    receipt.left_right("TOTAL:", &format_currency(calculate_total(&order.items)));
    receipt.blank();
    receipt.center("Thank you for ordering!");
    receipt.center("Visit again soon");

    receipt.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{OrderItem, Product};

    fn sample_order() -> OrderSession {
        let burger = Product::new("1", "Zinger Burger", "1066708", 149.0, "Burgers");
        let pepsi = Product::new("4", "Pepsi (Medium)", "4455009", 60.0, "Drinks");

        let mut order = OrderSession::new("AB12CD".into());
        order.customer_name = "Alice".into();
        order.customer_phone = Some("555-0199".into());
        order.items.push(OrderItem::from_product(&burger));
        order.items.push(OrderItem::from_product(&pepsi));
        order.items[0].quantity = 2;
        order
    }

    #[test]
    fn test_receipt_contains_header_lines_and_total() {
        let receipt = render_receipt(&sample_order());

        assert!(receipt.contains("POPIAH KITCHEN"));
        assert!(receipt.contains("AB12CD"));
        assert!(receipt.contains("Alice"));
        assert!(receipt.contains("555-0199"));
        assert!(receipt.contains("Zinger Burger"));
        assert!(receipt.contains("₹298.00"));
        assert!(receipt.contains("₹358.00"));
        assert!(receipt.contains("Thank you for ordering!"));
    }

    #[test]
    fn test_guest_fallback_when_name_blank() {
        let mut order = sample_order();
        order.customer_name.clear();
        order.customer_phone = None;

        let receipt = render_receipt(&order);
        assert!(receipt.contains("GUEST"));
        assert!(!receipt.contains("PHONE:"));
    }

    #[test]
    fn test_lines_fit_receipt_width() {
        let mut order = sample_order();
        order.items[0].name = "An Extremely Long Product Name That Overflows".into();

        let receipt = render_receipt(&order);
        for line in receipt.lines() {
            assert!(line.chars().count() <= RECEIPT_WIDTH, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_left_right_alignment() {
        let mut builder = ReceiptBuilder::new(20);
        builder.left_right("REF:", "AB12CD");
        let line = builder.build();
        assert_eq!(line, "REF:          AB12CD\n");
    }
}
