//! Injected key-value persistence.
//!
//! Every collection lives in one slot holding a JSON array. Repositories read
//! the whole slot, change it in memory and write it back.

pub mod keys;
pub mod memory;
pub mod slot;

pub use keys::*;
pub use memory::InMemoryStore;
pub use slot::{Slot, SlotRead};

use async_trait::async_trait;
use soar_audit_api::AuditError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        required: usize,
        quota: usize,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<StorageError> for AuditError {
    fn from(err: StorageError) -> Self {
        AuditError::PersistenceError(err.to_string())
    }
}

/// Byte-oriented slot store.
///
/// Implementations decide durability; writes replace the whole value of a key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
