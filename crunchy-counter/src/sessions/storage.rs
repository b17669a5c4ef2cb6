//! redb-based persistence bridge
//!
//! One table, one entry per top-level collection, each a JSON-serialized
//! array:
//!
//! | Key | Value |
//! |-----|-------|
//! | `catalog` | array of Product |
//! | `drafts` | array of OrderSession (status DRAFT only) |
//! | `pending_orders` | array of OrderSession (status PENDING or HOLD) |
//! | `order_history` | array of OrderSession (status DELIVERED or CANCELLED) |
//!
//! Every mutation re-serializes and overwrites its key wholesale; there is no
//! incremental diffing, no schema versioning, and no migration path. Exactly
//! one writer exists, so write ordering is last-writer-wins.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns and the database
//! file is always in a consistent state, which covers counter terminals that
//! get powered off mid-shift.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{OrderSession, Product};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding the four top-level collections as JSON bytes
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

const CATALOG_KEY: &str = "catalog";
const DRAFTS_KEY: &str = "drafts";
const PENDING_KEY: &str = "pending_orders";
const HISTORY_KEY: &str = "order_history";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Counter storage backed by redb
#[derive(Clone)]
pub struct CounterStorage {
    db: Arc<Database>,
}

impl CounterStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Overwrite one collection key with the full serialized array
    fn write_collection<T: Serialize>(&self, key: &str, values: &[T]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(values)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(key, bytes = bytes.len(), "Collection mirrored");
        Ok(())
    }

    /// Read one collection key, `None` when the key has never been written
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<Vec<T>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    // ========== Catalog ==========

    pub fn save_catalog(&self, products: &[Product]) -> StorageResult<()> {
        self.write_collection(CATALOG_KEY, products)
    }

    pub fn load_catalog(&self) -> StorageResult<Option<Vec<Product>>> {
        self.read_collection(CATALOG_KEY)
    }

    // ========== Drafts ==========

    pub fn save_drafts(&self, drafts: &[OrderSession]) -> StorageResult<()> {
        self.write_collection(DRAFTS_KEY, drafts)
    }

    pub fn load_drafts(&self) -> StorageResult<Option<Vec<OrderSession>>> {
        self.read_collection(DRAFTS_KEY)
    }

    // ========== Pending queue ==========

    pub fn save_pending(&self, pending: &[OrderSession]) -> StorageResult<()> {
        self.write_collection(PENDING_KEY, pending)
    }

    pub fn load_pending(&self) -> StorageResult<Option<Vec<OrderSession>>> {
        self.read_collection(PENDING_KEY)
    }

    // ========== History ==========

    pub fn save_history(&self, history: &[OrderSession]) -> StorageResult<()> {
        self.write_collection(HISTORY_KEY, history)
    }

    pub fn load_history(&self) -> StorageResult<Option<Vec<OrderSession>>> {
        self.read_collection(HISTORY_KEY)
    }
}
