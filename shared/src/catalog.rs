//! Catalog product model

use serde::{Deserialize, Serialize};

pub type ProductId = String;

/// Catalog product
///
/// A combo is a product whose `combo_items` lists the ids of its component
/// products. The combo price is authored independently; the component list is
/// informational and never enters price calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Display code shown on tickets and used by code search
    pub code: String,
    pub price: f64,
    pub category: String,
    /// Image reference (URL or path)
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub is_combo: bool,
    /// Component product ids; may repeat, only meaningful when `is_combo`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combo_items: Vec<ProductId>,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        code: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            price,
            category: category.into(),
            image: String::new(),
            available: true,
            is_combo: false,
            combo_items: Vec::new(),
        }
    }

    /// Sum of the component products' current prices.
    ///
    /// Reference figure for the catalog editor only; a dangling component id
    /// contributes nothing (deletion does not cascade into combos).
    pub fn individual_total(&self, catalog: &[Product]) -> f64 {
        self.combo_items
            .iter()
            .filter_map(|id| catalog.iter().find(|p| &p.id == id))
            .map(|p| p.price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Zinger Burger", "1066708", 149.0, "Burgers"),
            Product::new("3", "French Fries (Large)", "3399002", 99.0, "Sides"),
            Product::new("4", "Pepsi (Medium)", "4455009", 60.0, "Drinks"),
        ]
    }

    #[test]
    fn test_individual_total_counts_repeats() {
        let catalog = sample_catalog();
        let mut combo = Product::new("6", "Super Saver Combo", "CB-5001", 249.0, "Combos");
        combo.is_combo = true;
        combo.combo_items = vec!["1".into(), "4".into(), "4".into()];

        assert_eq!(combo.individual_total(&catalog), 269.0);
    }

    #[test]
    fn test_individual_total_skips_dangling_ids() {
        let catalog = sample_catalog();
        let mut combo = Product::new("6", "Super Saver Combo", "CB-5001", 249.0, "Combos");
        combo.is_combo = true;
        combo.combo_items = vec!["1".into(), "deleted".into()];

        assert_eq!(combo.individual_total(&catalog), 149.0);
    }

    #[test]
    fn test_product_serde_defaults() {
        let json = r#"{"id":"9","name":"Lemon Ice Tea","code":"4455010","price":75.0,"category":"Drinks"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.available);
        assert!(!product.is_combo);
        assert!(product.combo_items.is_empty());
    }
}
