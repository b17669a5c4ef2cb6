//! Billing entry helpers
//!
//! Customer name is the one required field in the system; it gates the
//! confirm action. Everything else passes through untouched.

use shared::OrderSession;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers and other short identifiers
pub const MAX_PHONE_LEN: usize = 100;

/// Non-blank after trimming and within the length limit
pub fn validate_customer_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.len() <= MAX_NAME_LEN
}

/// The "copy codes" payload: one `<code> x<qty>` line per item
pub fn order_codes(session: &OrderSession) -> String {
    session
        .items
        .iter()
        .map(|item| format!("{} x{}", item.code, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}
