//! Product catalog: store and seed data

pub mod seed;
pub mod store;

pub use seed::seed_products;
pub use store::CatalogStore;
