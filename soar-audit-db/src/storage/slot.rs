use serde::de::DeserializeOwned;
use serde::Serialize;
use soar_audit_api::{AuditError, AuditResult};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

use super::KeyValueStore;

/// Outcome of reading a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotRead<T> {
    /// The key has never been written or was removed
    Missing,
    Loaded(Vec<T>),
    /// Backend failure or undecodable payload
    Degraded(String),
}

/// Typed view of one slot holding a JSON array of `T`.
///
/// `load_all` is soft: a missing key, a backend failure or an undecodable
/// payload all read as an empty collection. Writes, and the reads that feed
/// them, are hard and return the failure.
pub struct Slot<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> Slot<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Reads the slot, telling an absent key apart from one that could not be
    /// read or decoded.
    pub async fn read(&self) -> SlotRead<T> {
        let bytes = match self.store.get(self.key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return SlotRead::Missing,
            Err(err) => {
                warn!(key = self.key, error = %err, "slot read failed");
                return SlotRead::Degraded(err.to_string());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(items) => SlotRead::Loaded(items),
            Err(err) => {
                warn!(key = self.key, error = %err, "slot payload undecodable");
                SlotRead::Degraded(err.to_string())
            }
        }
    }

    pub async fn load_all(&self) -> Vec<T> {
        match self.read().await {
            SlotRead::Loaded(items) => items,
            SlotRead::Missing | SlotRead::Degraded(_) => Vec::new(),
        }
    }

    /// Hard read for read-modify-write paths. A degraded slot is an error so
    /// the following write cannot replace data it never saw.
    pub async fn load_for_update(&self) -> AuditResult<Vec<T>> {
        match self.read().await {
            SlotRead::Loaded(items) => Ok(items),
            SlotRead::Missing => Ok(Vec::new()),
            SlotRead::Degraded(reason) => Err(AuditError::PersistenceError(format!(
                "slot '{}' is unreadable, refusing to overwrite it: {reason}",
                self.key
            ))),
        }
    }

    /// Replaces the whole collection.
    pub async fn save_all(&self, items: &[T]) -> AuditResult<()> {
        let bytes = serde_json::to_vec(items)?;
        self.store.set(self.key, bytes).await?;
        debug!(key = self.key, count = items.len(), "slot written");
        Ok(())
    }

    pub async fn clear(&self) -> AuditResult<()> {
        self.store.remove(self.key).await?;
        debug!(key = self.key, "slot cleared");
        Ok(())
    }
}
