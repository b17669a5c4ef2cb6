//! Order screen derived data: catalog filtering and ordering

use shared::{OrderSession, Product};

/// Search interpretation for the catalog browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Case-insensitive substring over name or code
    #[default]
    Text,
    /// Decimal-string prefix of the price
    Price,
}

/// Catalog browser filter state
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub search: String,
    pub mode: SearchMode,
    /// `None` means "All"
    pub category: Option<String>,
}

/// Distinct category names in first-seen order, prefixed by "All"
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut names = vec!["All".to_string()];
    for product in products {
        if !names[1..].contains(&product.category) {
            names.push(product.category.clone());
        }
    }
    names
}

/// Filter and order the catalog for browsing.
///
/// Only available products are shown. In PRICE mode the whole result sorts by
/// ascending price; otherwise items already in the active cart come first.
/// Both sorts are stable, so ties keep catalog order.
pub fn filter_catalog<'a>(
    products: &'a [Product],
    filter: &CatalogFilter,
    active: Option<&OrderSession>,
) -> Vec<&'a Product> {
    let search = filter.search.to_lowercase();
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|p| {
            let matches_search = search.is_empty()
                || match filter.mode {
                    SearchMode::Text => {
                        p.name.to_lowercase().contains(&search)
                            || p.code.to_lowercase().contains(&search)
                    }
                    SearchMode::Price => p.price.to_string().starts_with(&filter.search),
                };
            let matches_category = filter
                .category
                .as_deref()
                .is_none_or(|category| p.category == category);
            matches_search && matches_category && p.available
        })
        .collect();

    match filter.mode {
        SearchMode::Price => {
            filtered.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SearchMode::Text => {
            filtered.sort_by_key(|p| {
                let in_cart = active.is_some_and(|session| session.item_quantity(&p.id) > 0);
                if in_cart { 0 } else { 1 }
            });
        }
    }
    filtered
}
