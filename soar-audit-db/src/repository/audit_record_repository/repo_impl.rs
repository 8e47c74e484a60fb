use soar_audit_api::AuditRecord;
use std::sync::Arc;
use tracing::error;

use crate::repository::audit_trail_repository::AuditTrailRepositoryImpl;
use crate::storage::{KeyValueStore, Slot, AUDITS_KEY};

/// Phase-aware audit records, persisted as one JSON array.
///
/// Every mutation goes read-all, change, write-all. Concurrent writers are not
/// coordinated; the last write wins.
#[derive(Clone)]
pub struct AuditRecordRepositoryImpl {
    pub(crate) audits: Slot<AuditRecord>,
    pub(crate) trail: AuditTrailRepositoryImpl,
}

impl AuditRecordRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            audits: Slot::new(store.clone(), AUDITS_KEY),
            trail: AuditTrailRepositoryImpl::new(store),
        }
    }

    pub fn trail(&self) -> &AuditTrailRepositoryImpl {
        &self.trail
    }

    /// Writes back the collection as it was before a failed mutation.
    pub(super) async fn restore(&self, audits: &[AuditRecord]) {
        if let Err(err) = self.audits.save_all(audits).await {
            error!(key = self.audits.key(), error = %err, "failed to restore audits after a trail write failure");
        }
    }

    /// Every stored record in insertion order. Empty when the slot is unreadable.
    pub async fn load_all(&self) -> Vec<AuditRecord> {
        self.audits.load_all().await
    }
}
