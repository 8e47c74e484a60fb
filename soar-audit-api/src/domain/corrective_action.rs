use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::risk::RiskLevel;
use super::signature::DigitalSignature;

/// Lifecycle of a corrective action report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectiveActionStatus {
    #[default]
    Proposed,
    Approved,
    Implementing,
    Validating,
    Complete,
    Reopened,
}

impl CorrectiveActionStatus {
    /// Whether the lifecycle permits moving from `self` to `next`.
    ///
    /// The forward path is `proposed → approved → implementing → validating →
    /// complete`. A CAR under validation or already complete can be reopened,
    /// and a reopened CAR goes back to implementation.
    pub fn can_transition_to(&self, next: CorrectiveActionStatus) -> bool {
        use CorrectiveActionStatus::*;

        matches!(
            (self, next),
            (Proposed, Approved)
                | (Approved, Implementing)
                | (Implementing, Validating)
                | (Validating, Complete)
                | (Validating, Reopened)
                | (Complete, Reopened)
                | (Reopened, Implementing)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectiveActionStatus::Proposed => "proposed",
            CorrectiveActionStatus::Approved => "approved",
            CorrectiveActionStatus::Implementing => "implementing",
            CorrectiveActionStatus::Validating => "validating",
            CorrectiveActionStatus::Complete => "complete",
            CorrectiveActionStatus::Reopened => "reopened",
        }
    }
}

impl fmt::Display for CorrectiveActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Director of Safety verdict on a CAR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalStatus {
    #[default]
    Pending,
    Accepted,
    RequiresRevision,
    Complete,
}

impl FinalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalStatus::Pending => "pending",
            FinalStatus::Accepted => "accepted",
            FinalStatus::RequiresRevision => "requires-revision",
            FinalStatus::Complete => "complete",
        }
    }
}

/// Dual signature slot filled during CAR acceptance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceSignatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_manager: Option<DigitalSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditor: Option<DigitalSignature>,
}

/// Corrective Action Report.
///
/// Linked to exactly one finding of the same audit through `finding_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectiveAction {
    pub id: Uuid,
    pub finding_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment_id: Option<Uuid>,

    // Proposed action
    pub proposed_action: String,
    #[serde(default)]
    pub safety_risk_assessment: String,
    pub residual_risk_level: RiskLevel,

    // Controls and acceptance
    #[serde(default)]
    pub controls: Vec<String>,
    #[serde(default)]
    pub responsible_manager: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_acceptance_signature: Option<DigitalSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_acceptance_date: Option<DateTime<Utc>>,

    // Process control
    #[serde(default)]
    pub process_description: String,
    #[serde(default)]
    pub process_flow: String,
    #[serde(default)]
    pub document_affected: Vec<String>,
    #[serde(default)]
    pub implementation_responsibilities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_completion_date: Option<DateTime<Utc>>,

    // CAR acceptance
    #[serde(default)]
    pub documentation_evidence: String,
    #[serde(default)]
    pub implementation_evidence: String,
    #[serde(default)]
    pub training_evidence: String,
    #[serde(default)]
    pub acceptance_signatures: AcceptanceSignatures,
    #[serde(default)]
    pub acceptance_comments: String,

    // Implementation validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<String>,
    #[serde(default)]
    pub completeness_confirmed: bool,
    #[serde(default)]
    pub permanence_confirmed: bool,
    #[serde(default)]
    pub performance_creep_observed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_creep_notes: Option<String>,

    // Director of Safety final acceptance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_acceptance_signature: Option<DigitalSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_acceptance_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub final_status: FinalStatus,

    pub status: CorrectiveActionStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
}

impl CorrectiveAction {
    /// Creates a freshly proposed CAR for `finding_id`.
    pub fn propose(
        finding_id: Uuid,
        proposed_action: impl Into<String>,
        residual_risk_level: RiskLevel,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            finding_id,
            risk_assessment_id: None,
            proposed_action: proposed_action.into(),
            safety_risk_assessment: String::new(),
            residual_risk_level,
            controls: Vec::new(),
            responsible_manager: String::new(),
            manager_acceptance_signature: None,
            manager_acceptance_date: None,
            process_description: String::new(),
            process_flow: String::new(),
            document_affected: Vec::new(),
            implementation_responsibilities: String::new(),
            target_completion_date: None,
            documentation_evidence: String::new(),
            implementation_evidence: String::new(),
            training_evidence: String::new(),
            acceptance_signatures: AcceptanceSignatures::default(),
            acceptance_comments: String::new(),
            validation_date: None,
            validated_by: None,
            completeness_confirmed: false,
            permanence_confirmed: false,
            performance_creep_observed: false,
            performance_creep_notes: None,
            director_acceptance_signature: None,
            director_acceptance_date: None,
            final_status: FinalStatus::Pending,
            status: CorrectiveActionStatus::Proposed,
            created_at: now,
            created_by: created_by.into(),
            updated_at: now,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.final_status == FinalStatus::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CorrectiveActionStatus::*;

    #[test]
    fn test_forward_path_is_allowed() {
        let path = [Proposed, Approved, Implementing, Validating, Complete];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_reopen_paths() {
        assert!(Validating.can_transition_to(Reopened));
        assert!(Complete.can_transition_to(Reopened));
        assert!(Reopened.can_transition_to(Implementing));
        assert!(!Proposed.can_transition_to(Reopened));
    }

    #[test]
    fn test_skips_and_reversals_are_rejected() {
        assert!(!Proposed.can_transition_to(Complete));
        assert!(!Approved.can_transition_to(Validating));
        assert!(!Complete.can_transition_to(Validating));
        assert!(!Implementing.can_transition_to(Implementing));
    }
}
