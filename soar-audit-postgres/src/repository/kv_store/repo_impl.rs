use async_trait::async_trait;
use soar_audit_db::storage::{KeyValueStore, StorageError};
use sqlx::PgPool;
use std::sync::Arc;

/// Slot store backed by the `soar_kv_slot` table, one row per key.
#[derive(Clone)]
pub struct PgKeyValueStore {
    pub(crate) pool: Arc<PgPool>,
}

impl PgKeyValueStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

pub(crate) fn backend_error(err: sqlx::Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

#[async_trait]
impl KeyValueStore for PgKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Self::get_impl(self, key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        Self::set_impl(self, key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::remove_impl(self, key).await
    }
}
