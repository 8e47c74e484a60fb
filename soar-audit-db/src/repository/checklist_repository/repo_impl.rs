use soar_audit_api::ChecklistVersion;
use std::sync::Arc;

use crate::storage::{KeyValueStore, Slot, CHECKLISTS_KEY};

/// Versioned checklists. Archived versions are frozen and every revision
/// becomes a new version of the same checklist family.
#[derive(Clone)]
pub struct ChecklistRepositoryImpl {
    pub(crate) versions: Slot<ChecklistVersion>,
}

impl ChecklistRepositoryImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            versions: Slot::new(store, CHECKLISTS_KEY),
        }
    }
}
