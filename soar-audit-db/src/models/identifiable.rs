use soar_audit_api::{AuditRecord, AuditTrailEntry, ChecklistVersion, SimpleAuditRecord};
use uuid::Uuid;

/// Trait for entities that can be uniquely identified by a UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}

impl Identifiable for AuditRecord {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for SimpleAuditRecord {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for ChecklistVersion {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for AuditTrailEntry {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
