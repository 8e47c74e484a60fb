use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// Process-local store. Optionally enforces a total byte quota across all
/// keys, the way browser storage does.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Bytes currently held across all keys.
    pub fn used_bytes(&self) -> usize {
        self.slots.read().values().map(Vec::len).sum()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.read().contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut slots = self.slots.write();

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let required = others + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }

        slots.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.write().remove(key);
        Ok(())
    }
}
