use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audit_record::{ImplementationValidation, PhaseData, ProcessControl};
use super::audit_type::{AuditStatus, AuditType, ProgramType};
use super::corrective_action::CorrectiveAction;
use super::finding::{AuditFinding, OperatorSelfAssessment};
use super::phase::AuditPhase;
use super::risk::RiskAssessment;
use super::signature::{Approvals, DigitalSignature};
use super::sub_finding::SubFinding;

/// Typed value of an audit record field, as captured in trail entries.
///
/// One variant per field type of [`crate::AuditRecord`], so old and new
/// values survive serialization without losing their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Text(String),
    OptionalText(Option<String>),
    Timestamp(DateTime<Utc>),
    OptionalTimestamp(Option<DateTime<Utc>>),
    AuditType(AuditType),
    ProgramType(ProgramType),
    Phase(AuditPhase),
    Status(AuditStatus),
    PhaseHistory(Vec<PhaseData>),
    Findings(Vec<AuditFinding>),
    SubFindings(Vec<SubFinding>),
    RiskAssessments(Vec<RiskAssessment>),
    CorrectiveActions(Vec<CorrectiveAction>),
    Signatures(Vec<DigitalSignature>),
    Approvals(Box<Approvals>),
    SelfAssessment(Option<Box<OperatorSelfAssessment>>),
    ProcessControl(Option<ProcessControl>),
    ImplementationValidation(Option<ImplementationValidation>),
}

impl FieldValue {
    /// Short human readable rendering for trail viewers.
    pub fn summary(&self) -> String {
        match self {
            FieldValue::Text(value) => value.clone(),
            FieldValue::OptionalText(value) => value.clone().unwrap_or_default(),
            FieldValue::Timestamp(value) => value.to_rfc3339(),
            FieldValue::OptionalTimestamp(value) => {
                value.map(|v| v.to_rfc3339()).unwrap_or_default()
            }
            FieldValue::AuditType(value) => value.to_string(),
            FieldValue::ProgramType(value) => value.as_str().to_string(),
            FieldValue::Phase(value) => value.to_string(),
            FieldValue::Status(value) => value.to_string(),
            FieldValue::PhaseHistory(items) => format!("{} phase entries", items.len()),
            FieldValue::Findings(items) => format!("{} findings", items.len()),
            FieldValue::SubFindings(items) => format!("{} sub-findings", items.len()),
            FieldValue::RiskAssessments(items) => format!("{} risk assessments", items.len()),
            FieldValue::CorrectiveActions(items) => format!("{} corrective actions", items.len()),
            FieldValue::Signatures(items) => format!("{} signatures", items.len()),
            FieldValue::Approvals(_) => "approvals".to_string(),
            FieldValue::SelfAssessment(value) => presence(value.is_some()),
            FieldValue::ProcessControl(value) => presence(value.is_some()),
            FieldValue::ImplementationValidation(value) => presence(value.is_some()),
        }
    }
}

fn presence(present: bool) -> String {
    if present { "recorded" } else { "empty" }.to_string()
}

/// One top-level field replaced by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub old_value: FieldValue,
    pub new_value: FieldValue,
}

/// Append-only change log entry, stored in the global trail keyed by audit id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailEntry {
    pub id: Uuid,
    pub audit_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub user_name: String,
    /// `created`, `signed`, `updated_<field>`, ...
    pub action: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_changed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<FieldValue>,
}

/// Trail entry as requested by a caller, before id and timestamp exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntryDraft {
    pub audit_id: Uuid,
    pub user_id: String,
    pub action: String,
    pub description: String,
    pub field_changed: Option<String>,
    pub old_value: Option<FieldValue>,
    pub new_value: Option<FieldValue>,
}

impl TrailEntryDraft {
    pub fn new(
        audit_id: Uuid,
        user_id: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            audit_id,
            user_id: user_id.into(),
            action: action.into(),
            description: description.into(),
            field_changed: None,
            old_value: None,
            new_value: None,
        }
    }

    /// Draft describing one field replaced by an update.
    pub fn for_change(audit_id: Uuid, user_id: impl Into<String>, change: FieldChange) -> Self {
        Self {
            audit_id,
            user_id: user_id.into(),
            action: format!("updated_{}", change.field),
            description: format!("{} updated", change.field),
            field_changed: Some(change.field.to_string()),
            old_value: Some(change.old_value),
            new_value: Some(change.new_value),
        }
    }

    pub fn into_entry(self) -> AuditTrailEntry {
        AuditTrailEntry {
            id: Uuid::new_v4(),
            audit_id: self.audit_id,
            timestamp: Utc::now(),
            user_name: self.user_id.clone(),
            user_id: self.user_id,
            action: self.action,
            description: self.description,
            field_changed: self.field_changed,
            old_value: self.old_value,
            new_value: self.new_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_is_tagged_on_the_wire() {
        let value = FieldValue::Phase(AuditPhase::Analysis);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "phase", "value": "analysis"}));

        let back: FieldValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_change_draft_names_the_field() {
        let audit_id = Uuid::new_v4();
        let draft = TrailEntryDraft::for_change(
            audit_id,
            "auditor-1",
            FieldChange {
                field: "organizationName",
                old_value: FieldValue::Text("Old Air".to_string()),
                new_value: FieldValue::Text("New Air".to_string()),
            },
        );
        assert_eq!(draft.action, "updated_organizationName");
        assert_eq!(draft.field_changed.as_deref(), Some("organizationName"));

        let entry = draft.into_entry();
        assert_eq!(entry.audit_id, audit_id);
        assert_eq!(entry.user_name, "auditor-1");
        assert_eq!(entry.old_value.map(|v| v.summary()), Some("Old Air".to_string()));
    }
}
