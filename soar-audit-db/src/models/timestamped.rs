use chrono::{DateTime, Utc};
use soar_audit_api::{AuditRecord, AuditTrailEntry, ChecklistVersion, SimpleAuditRecord};

use super::identifiable::Identifiable;

/// Entities listed newest first by their creation instant
pub trait Timestamped: Identifiable {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Timestamped for AuditRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for SimpleAuditRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

impl Timestamped for ChecklistVersion {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for AuditTrailEntry {
    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
