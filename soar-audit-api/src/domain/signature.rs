use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::phase::AuditPhase;
use super::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// Captured signature, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSignature {
    pub id: Uuid,
    pub audit_id: Uuid,
    pub phase: AuditPhase,
    pub signer: Signer,
    pub timestamp: DateTime<Utc>,
    /// Opaque payload, base64 encoded canvas drawing in the browser client
    pub signature: String,
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Signature as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignature {
    pub phase: AuditPhase,
    pub signer: Signer,
    pub signature: String,
    pub accepted: bool,
    pub comments: Option<String>,
}

impl NewSignature {
    pub fn into_signature(self, audit_id: Uuid) -> DigitalSignature {
        DigitalSignature {
            id: Uuid::new_v4(),
            audit_id,
            phase: self.phase,
            signer: self.signer,
            timestamp: Utc::now(),
            signature: self.signature,
            accepted: self.accepted,
            comments: self.comments,
        }
    }
}

/// Named approval slots on an audit record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approvals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_responsible_manager: Option<DigitalSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor: Option<DigitalSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_of_safety: Option<DigitalSignature>,
}
