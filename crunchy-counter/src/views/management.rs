//! Catalog editor helpers
//!
//! Combo membership is edited here and nowhere else; the rest of the system
//! treats `combo_items` as opaque snapshot data.

use shared::{Product, ProductId};

/// Products eligible as combo components. Combos never nest.
pub fn component_candidates(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| !p.is_combo).collect()
}

/// Toggle a product's membership in a combo's component list
pub fn toggle_component(combo_items: &mut Vec<ProductId>, product_id: &str) {
    if let Some(pos) = combo_items.iter().position(|id| id == product_id) {
        combo_items.remove(pos);
    } else {
        combo_items.push(product_id.to_string());
    }
}

/// Default combo name: component names joined with " + "
pub fn combo_auto_name(combo_items: &[ProductId], products: &[Product]) -> String {
    combo_items
        .iter()
        .filter_map(|id| products.iter().find(|p| &p.id == id))
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Sum of the selected components' current prices, shown next to the
/// independently authored combo price. Dangling ids contribute nothing.
pub fn components_total(combo_items: &[ProductId], products: &[Product]) -> f64 {
    combo_items
        .iter()
        .filter_map(|id| products.iter().find(|p| &p.id == id))
        .map(|p| p.price)
        .sum()
}
