use std::sync::Arc;

use crate::storage::KeyValueStore;
use crate::workflow::PhaseStateMachine;

use super::{
    AuditRecordRepositoryImpl, AuditTrailRepositoryImpl, ChecklistRepositoryImpl,
    SimpleAuditRepositoryImpl,
};

/// Builds every repository over one shared store.
pub struct AuditRepoFactory {
    store: Arc<dyn KeyValueStore>,
}

impl AuditRepoFactory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create all repositories sharing the factory's store
    pub fn create_all_repositories(&self) -> AuditRepositories {
        let audit_record_repository = AuditRecordRepositoryImpl::new(self.store.clone());
        let phase_state_machine = Arc::new(PhaseStateMachine::new(audit_record_repository.clone()));

        AuditRepositories {
            audit_trail_repository: Arc::new(audit_record_repository.trail().clone()),
            audit_record_repository: Arc::new(audit_record_repository),
            checklist_repository: Arc::new(ChecklistRepositoryImpl::new(self.store.clone())),
            simple_audit_repository: Arc::new(SimpleAuditRepositoryImpl::new(self.store.clone())),
            phase_state_machine,
        }
    }
}

pub struct AuditRepositories {
    pub audit_record_repository: Arc<AuditRecordRepositoryImpl>,
    pub audit_trail_repository: Arc<AuditTrailRepositoryImpl>,
    pub checklist_repository: Arc<ChecklistRepositoryImpl>,
    pub simple_audit_repository: Arc<SimpleAuditRepositoryImpl>,
    pub phase_state_machine: Arc<PhaseStateMachine>,
}
