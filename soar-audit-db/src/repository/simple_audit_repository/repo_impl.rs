use soar_audit_api::SimpleAuditRecord;
use std::sync::Arc;

use crate::storage::{KeyValueStore, Slot, SIMPLE_AUDITS_KEY};

/// Flat audits of the single-form workflow. Changes here are not trailed.
#[derive(Clone)]
pub struct SimpleAuditRepositoryImpl {
    pub(crate) audits: Slot<SimpleAuditRecord>,
}

impl SimpleAuditRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            audits: Slot::new(store, SIMPLE_AUDITS_KEY),
        }
    }

    pub async fn load_all(&self) -> Vec<SimpleAuditRecord> {
        self.audits.load_all().await
    }

    /// Drops every flat audit.
    pub async fn clear(&self) -> soar_audit_api::AuditResult<()> {
        self.audits.clear().await
    }
}
