use serde::Serialize;
use uuid::Uuid;

use crate::error::AuditResult;

/// Pretty-printed serialization of a whole record.
pub fn export_json<T: Serialize>(record: &T) -> AuditResult<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

pub fn json_file_name(audit_id: Uuid) -> String {
    format!("audit-{audit_id}.json")
}
