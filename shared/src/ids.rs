//! Identifier generation

use rand::Rng;

const ORDER_ID_LEN: usize = 6;
const ORDER_ID_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a short order token, e.g. "K3F9ZQ"
///
/// Uniqueness is probabilistic; collisions across tens of live sessions are
/// not a practical concern and are not checked.
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_ID_LEN)
        .map(|_| ORDER_ID_CHARSET[rng.gen_range(0..ORDER_ID_CHARSET.len())] as char)
        .collect()
}

/// Generate a product id for admin-created catalog entries
pub fn generate_product_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
