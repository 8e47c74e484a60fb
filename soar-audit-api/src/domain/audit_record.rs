use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuditError, AuditResult};

use super::audit_type::{AuditStatus, AuditType, ProgramType};
use super::corrective_action::CorrectiveAction;
use super::finding::{AuditFinding, OperatorSelfAssessment};
use super::phase::{AuditPhase, PhaseStatus};
use super::risk::{RiskAssessment, RiskProfile};
use super::signature::{Approvals, DigitalSignature};
use super::sub_finding::SubFinding;
use super::trail::{FieldChange, FieldValue};

/// Entry in an audit's phase history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseData {
    pub phase: AuditPhase,
    pub status: PhaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
}

impl PhaseData {
    pub fn started(phase: AuditPhase) -> Self {
        Self {
            phase,
            status: PhaseStatus::InProgress,
            completed_at: None,
            completed_by: None,
        }
    }

    /// History entry written when an actor moves the audit into `phase`.
    pub fn entered_by(phase: AuditPhase, actor_id: impl Into<String>) -> Self {
        Self {
            phase,
            status: PhaseStatus::InProgress,
            completed_at: Some(Utc::now()),
            completed_by: Some(actor_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessControl {
    pub description: String,
    pub flow_diagram: String,
    pub controls: Vec<String>,
    pub mitigating_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationValidation {
    pub validated_at: DateTime<Utc>,
    pub validated_by: String,
    pub evidence_of_implementation: Vec<String>,
    pub performance_creep_notes: String,
    pub final_score: i32,
}

/// Complete phase-aware audit record.
///
/// # Invariants
/// - `current_phase` equals the phase of the last `phase_history` entry.
/// - `phase_history` and `signatures` only ever grow at the end.
/// - `normalized_score` and `risk_profile` are caches recomputed from
///   `findings`, `corrective_actions` and `risk_assessments` on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: Uuid,
    pub organization_name: String,
    pub audit_type: AuditType,
    pub audit_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub program_type: ProgramType,

    pub current_phase: AuditPhase,
    pub phase_history: Vec<PhaseData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_self_assessment: Option<OperatorSelfAssessment>,

    #[serde(default)]
    pub findings: Vec<AuditFinding>,
    #[serde(default)]
    pub sub_findings: Vec<SubFinding>,
    #[serde(default)]
    pub risk_assessments: Vec<RiskAssessment>,
    #[serde(default)]
    pub corrective_actions: Vec<CorrectiveAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_control: Option<ProcessControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_validation: Option<ImplementationValidation>,

    /// 0-100
    pub normalized_score: u8,
    pub risk_profile: RiskProfile,

    #[serde(default)]
    pub signatures: Vec<DigitalSignature>,
    #[serde(default)]
    pub approvals: Approvals,

    pub checklist_version: String,
    pub checklist_version_id: String,

    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_by: Option<String>,
}

impl AuditRecord {
    pub fn finding(&self, finding_id: Uuid) -> Option<&AuditFinding> {
        self.findings.iter().find(|f| f.id == finding_id)
    }

    pub fn corrective_action(&self, action_id: Uuid) -> Option<&CorrectiveAction> {
        self.corrective_actions.iter().find(|a| a.id == action_id)
    }

    pub fn completed_corrective_actions(&self) -> usize {
        self.corrective_actions.iter().filter(|a| a.is_complete()).count()
    }

    /// Whether `current_phase` agrees with the tail of `phase_history`.
    pub fn phase_is_consistent(&self) -> bool {
        self.phase_history
            .last()
            .map(|entry| entry.phase == self.current_phase)
            .unwrap_or(false)
    }
}

/// Caller-supplied fields of a new audit. Everything is optional, the store
/// fills defaults for whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAuditRecord {
    pub organization_name: Option<String>,
    pub audit_type: Option<AuditType>,
    pub audit_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub program_type: Option<ProgramType>,
    pub checklist_version: Option<String>,
    pub checklist_version_id: Option<String>,
    pub status: Option<AuditStatus>,
}

impl NewAuditRecord {
    pub fn for_organization(name: impl Into<String>, audit_type: AuditType) -> Self {
        Self {
            organization_name: Some(name.into()),
            audit_type: Some(audit_type),
            ..Default::default()
        }
    }

    pub fn created_by_actor(&self) -> String {
        self.created_by.clone().unwrap_or_else(|| "system".to_string())
    }

    /// Builds the record in the `preparation` phase with empty collections.
    ///
    /// Derived fields start at their empty-record values; the caller refreshes
    /// them through the scoring service before persisting.
    pub fn into_record(self) -> AuditRecord {
        let now = Utc::now();
        let audit_type = self.audit_type.unwrap_or(AuditType::Custom);
        let created_by = self.created_by_actor();

        AuditRecord {
            id: Uuid::new_v4(),
            organization_name: self.organization_name.unwrap_or_else(|| "Unknown".to_string()),
            audit_type,
            audit_date: self.audit_date.unwrap_or(now),
            created_at: now,
            created_by,
            updated_at: now,
            program_type: self.program_type.unwrap_or(ProgramType::SoarPlus),
            current_phase: AuditPhase::Preparation,
            phase_history: vec![PhaseData::started(AuditPhase::Preparation)],
            operator_self_assessment: None,
            findings: Vec::new(),
            sub_findings: Vec::new(),
            risk_assessments: Vec::new(),
            corrective_actions: Vec::new(),
            process_control: None,
            implementation_validation: None,
            normalized_score: 0,
            risk_profile: RiskProfile::default(),
            signatures: Vec::new(),
            approvals: Approvals::default(),
            checklist_version: self.checklist_version.unwrap_or_else(|| "1.0".to_string()),
            checklist_version_id: self
                .checklist_version_id
                .unwrap_or_else(|| format!("checklist_{audit_type}_v1")),
            status: self.status.unwrap_or(AuditStatus::Draft),
            closed_at: None,
            closed_by: None,
        }
    }
}

/// Shallow partial update of an [`AuditRecord`].
///
/// Every `Some` field replaces the stored top-level field wholesale and yields
/// one [`FieldChange`]. Derived fields, ids and creation stamps are not
/// updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditRecordUpdate {
    pub organization_name: Option<String>,
    pub audit_type: Option<AuditType>,
    pub audit_date: Option<DateTime<Utc>>,
    pub program_type: Option<ProgramType>,
    pub current_phase: Option<AuditPhase>,
    pub phase_history: Option<Vec<PhaseData>>,
    pub operator_self_assessment: Option<Option<OperatorSelfAssessment>>,
    pub findings: Option<Vec<AuditFinding>>,
    pub sub_findings: Option<Vec<SubFinding>>,
    pub risk_assessments: Option<Vec<RiskAssessment>>,
    pub corrective_actions: Option<Vec<CorrectiveAction>>,
    pub process_control: Option<Option<ProcessControl>>,
    pub implementation_validation: Option<Option<ImplementationValidation>>,
    pub signatures: Option<Vec<DigitalSignature>>,
    pub approvals: Option<Approvals>,
    pub checklist_version: Option<String>,
    pub checklist_version_id: Option<String>,
    pub status: Option<AuditStatus>,
    pub closed_at: Option<Option<DateTime<Utc>>>,
    pub closed_by: Option<Option<String>>,
}

impl AuditRecordUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the update into `record` and returns one change per field
    /// present, in declaration order.
    ///
    /// Rejected without touching `record` when the update would shrink or
    /// rewrite `phase_history` or `signatures`, or leave `current_phase`
    /// out of step with the last history entry.
    pub fn apply_to(self, record: &mut AuditRecord) -> AuditResult<Vec<FieldChange>> {
        if let Some(history) = &self.phase_history {
            ensure_extends(&record.phase_history, history, "phaseHistory")?;
        }
        if let Some(signatures) = &self.signatures {
            ensure_extends(&record.signatures, signatures, "signatures")?;
        }
        let resulting_phase = self.current_phase.unwrap_or(record.current_phase);
        let resulting_tail = self
            .phase_history
            .as_ref()
            .unwrap_or(&record.phase_history)
            .last()
            .map(|entry| entry.phase);
        if resulting_tail != Some(resulting_phase) {
            return Err(AuditError::InvalidTransition(format!(
                "currentPhase {resulting_phase} does not match the latest phaseHistory entry"
            )));
        }

        let mut changes = Vec::new();
        let changes_ref = &mut changes;

        if let Some(v) = self.organization_name {
            replace(&mut record.organization_name, v, "organizationName", FieldValue::Text, changes_ref);
        }
        if let Some(v) = self.audit_type {
            replace(&mut record.audit_type, v, "auditType", FieldValue::AuditType, changes_ref);
        }
        if let Some(v) = self.audit_date {
            replace(&mut record.audit_date, v, "auditDate", FieldValue::Timestamp, changes_ref);
        }
        if let Some(v) = self.program_type {
            replace(&mut record.program_type, v, "programType", FieldValue::ProgramType, changes_ref);
        }
        if let Some(v) = self.current_phase {
            replace(&mut record.current_phase, v, "currentPhase", FieldValue::Phase, changes_ref);
        }
        if let Some(v) = self.phase_history {
            replace(&mut record.phase_history, v, "phaseHistory", FieldValue::PhaseHistory, changes_ref);
        }
        if let Some(v) = self.operator_self_assessment {
            replace(
                &mut record.operator_self_assessment,
                v,
                "operatorSelfAssessment",
                |v| FieldValue::SelfAssessment(v.map(Box::new)),
                changes_ref,
            );
        }
        if let Some(v) = self.findings {
            replace(&mut record.findings, v, "findings", FieldValue::Findings, changes_ref);
        }
        if let Some(v) = self.sub_findings {
            replace(&mut record.sub_findings, v, "subFindings", FieldValue::SubFindings, changes_ref);
        }
        if let Some(v) = self.risk_assessments {
            replace(&mut record.risk_assessments, v, "riskAssessments", FieldValue::RiskAssessments, changes_ref);
        }
        if let Some(v) = self.corrective_actions {
            replace(&mut record.corrective_actions, v, "correctiveActions", FieldValue::CorrectiveActions, changes_ref);
        }
        if let Some(v) = self.process_control {
            replace(&mut record.process_control, v, "processControl", FieldValue::ProcessControl, changes_ref);
        }
        if let Some(v) = self.implementation_validation {
            replace(
                &mut record.implementation_validation,
                v,
                "implementationValidation",
                FieldValue::ImplementationValidation,
                changes_ref,
            );
        }
        if let Some(v) = self.signatures {
            replace(&mut record.signatures, v, "signatures", FieldValue::Signatures, changes_ref);
        }
        if let Some(v) = self.approvals {
            replace(&mut record.approvals, v, "approvals", |v| FieldValue::Approvals(Box::new(v)), changes_ref);
        }
        if let Some(v) = self.checklist_version {
            replace(&mut record.checklist_version, v, "checklistVersion", FieldValue::Text, changes_ref);
        }
        if let Some(v) = self.checklist_version_id {
            replace(&mut record.checklist_version_id, v, "checklistVersionId", FieldValue::Text, changes_ref);
        }
        if let Some(v) = self.status {
            replace(&mut record.status, v, "status", FieldValue::Status, changes_ref);
        }
        if let Some(v) = self.closed_at {
            replace(&mut record.closed_at, v, "closedAt", FieldValue::OptionalTimestamp, changes_ref);
        }
        if let Some(v) = self.closed_by {
            replace(&mut record.closed_by, v, "closedBy", FieldValue::OptionalText, changes_ref);
        }

        Ok(changes)
    }
}

fn replace<T: Clone>(
    slot: &mut T,
    value: T,
    field: &'static str,
    wrap: impl Fn(T) -> FieldValue,
    changes: &mut Vec<FieldChange>,
) {
    let old = std::mem::replace(slot, value.clone());
    changes.push(FieldChange {
        field,
        old_value: wrap(old),
        new_value: wrap(value),
    });
}

fn ensure_extends<T: PartialEq>(current: &[T], proposed: &[T], field: &str) -> AuditResult<()> {
    if proposed.len() < current.len() || proposed[..current.len()] != *current {
        return Err(AuditError::InvalidTransition(format!(
            "{field} is append-only; existing entries cannot be removed or rewritten"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::finding::ComplianceStatus;

    fn new_record() -> AuditRecord {
        NewAuditRecord::for_organization("Skyline Air", AuditType::Iosa).into_record()
    }

    #[test]
    fn test_new_record_defaults() {
        let record = NewAuditRecord::default().into_record();
        assert_eq!(record.organization_name, "Unknown");
        assert_eq!(record.audit_type, AuditType::Custom);
        assert_eq!(record.created_by, "system");
        assert_eq!(record.current_phase, AuditPhase::Preparation);
        assert_eq!(record.phase_history.len(), 1);
        assert!(record.phase_is_consistent());
        assert_eq!(record.checklist_version_id, "checklist_custom_v1");
        assert_eq!(record.status, AuditStatus::Draft);
    }

    #[test]
    fn test_apply_records_old_and_new_values() {
        let mut record = new_record();
        let update = AuditRecordUpdate {
            organization_name: Some("Skyline Cargo".to_string()),
            status: Some(AuditStatus::InProgress),
            ..Default::default()
        };

        let changes = update.apply_to(&mut record).unwrap();

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].field, "organizationName");
        assert_eq!(changes[0].old_value, FieldValue::Text("Skyline Air".to_string()));
        assert_eq!(changes[0].new_value, FieldValue::Text("Skyline Cargo".to_string()));
        assert_eq!(changes[1].field, "status");
        assert_eq!(record.status, AuditStatus::InProgress);
    }

    #[test]
    fn test_phase_change_must_extend_history() {
        let mut record = new_record();
        let mut history = record.phase_history.clone();
        history.push(PhaseData::entered_by(AuditPhase::SelfAssessment, "manager-1"));

        let update = AuditRecordUpdate {
            current_phase: Some(AuditPhase::SelfAssessment),
            phase_history: Some(history),
            ..Default::default()
        };
        assert_eq!(update.apply_to(&mut record).unwrap().len(), 2);
        assert!(record.phase_is_consistent());
    }

    #[test]
    fn test_phase_without_history_is_rejected() {
        let mut record = new_record();
        let before = record.clone();
        let update = AuditRecordUpdate {
            current_phase: Some(AuditPhase::Audit),
            ..Default::default()
        };
        assert!(matches!(
            update.apply_to(&mut record),
            Err(AuditError::InvalidTransition(_))
        ));
        assert_eq!(record, before);
    }

    #[test]
    fn test_history_cannot_shrink() {
        let mut record = new_record();
        let update = AuditRecordUpdate {
            phase_history: Some(Vec::new()),
            ..Default::default()
        };
        assert!(update.apply_to(&mut record).is_err());
    }

    #[test]
    fn test_findings_replace_wholesale() {
        let mut record = new_record();
        let finding = AuditFinding::new("3.005", "Roles and responsibilities", ComplianceStatus::Observation);
        let update = AuditRecordUpdate {
            findings: Some(vec![finding.clone()]),
            ..Default::default()
        };
        let changes = update.apply_to(&mut record).unwrap();
        assert_eq!(changes[0].old_value, FieldValue::Findings(Vec::new()));
        assert_eq!(record.findings, vec![finding]);
    }
}
