use soar_audit_api::{AuditRecord, AuditTrailEntry};
use std::sync::Arc;

use crate::storage::{KeyValueStore, Slot, AUDITS_KEY, TRAIL_KEY};

/// Global, append-only trail of changes to phase-aware audits.
///
/// Entries of every audit share one slot and are kept in insertion order.
#[derive(Clone)]
pub struct AuditTrailRepositoryImpl {
    pub(crate) trail: Slot<AuditTrailEntry>,
    pub(crate) audits: Slot<AuditRecord>,
}

impl AuditTrailRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            trail: Slot::new(store.clone(), TRAIL_KEY),
            audits: Slot::new(store, AUDITS_KEY),
        }
    }
}
