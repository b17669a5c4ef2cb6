//! Catalog store
//!
//! In-memory ordered product list, fully replaced on admin edits and
//! mirrored to storage after every mutation. There is no partial-update API.

use super::seed::seed_products;
use crate::sessions::storage::{CounterStorage, StorageResult};
use shared::{Product, ProductId, generate_product_id};

pub struct CatalogStore {
    storage: CounterStorage,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Rehydrate the catalog, seeding it on first run
    pub fn load(storage: CounterStorage) -> StorageResult<Self> {
        let products = match storage.load_catalog()? {
            Some(products) => products,
            None => {
                let seeded = seed_products();
                storage.save_catalog(&seeded)?;
                tracing::info!(count = seeded.len(), "Catalog seeded");
                seeded
            }
        };
        Ok(Self { storage, products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Append a product under a freshly generated id, returning the id
    pub fn add_product(&mut self, mut product: Product) -> StorageResult<ProductId> {
        product.id = generate_product_id();
        let id = product.id.clone();
        tracing::info!(product_id = %id, name = %product.name, "Product added");
        self.products.push(product);
        self.storage.save_catalog(&self.products)?;
        Ok(id)
    }

    /// Replace the entry matching the product's id; no-op when absent
    pub fn update_product(&mut self, product: Product) -> StorageResult<bool> {
        let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(false);
        };
        *existing = product;
        self.storage.save_catalog(&self.products)?;
        Ok(true)
    }

    /// Remove by id unconditionally. Combos referencing the deleted product
    /// keep their dangling component ids; placed order snapshots are
    /// unaffected since they never re-read the catalog.
    pub fn delete_product(&mut self, id: &str) -> StorageResult<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Ok(false);
        }
        self.storage.save_catalog(&self.products)?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(true)
    }
}
