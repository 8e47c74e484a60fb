use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::risk::RiskLevel;

/// Auditor verdict on one checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonConformity,
    Observation,
}

impl ComplianceStatus {
    /// Bucket used by the normalized score: compliant answers cost the low
    /// weight, anything else the high weight.
    pub fn score_bucket(&self) -> RiskLevel {
        match self {
            ComplianceStatus::Compliant => RiskLevel::Low,
            ComplianceStatus::NonConformity | ComplianceStatus::Observation => RiskLevel::High,
        }
    }

    /// Bucket used for report badges.
    pub fn display_level(&self) -> RiskLevel {
        match self {
            ComplianceStatus::Compliant => RiskLevel::Low,
            ComplianceStatus::Observation => RiskLevel::Medium,
            ComplianceStatus::NonConformity => RiskLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonConformity => "Non-Conformity",
            ComplianceStatus::Observation => "Observation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCauseDepth {
    Symptom,
    Process,
    Systemic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseAnalysis {
    pub identified_causes: Vec<String>,
    pub analysis_notes: String,
    pub depth: RootCauseDepth,
}

/// Comparison between the operator's self score and the auditor's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAssessmentComparison {
    pub operator_score: i32,
    pub audit_score: i32,
    pub variance: i32,
    pub notes: String,
}

impl SelfAssessmentComparison {
    pub fn new(operator_score: i32, audit_score: i32, notes: impl Into<String>) -> Self {
        Self {
            operator_score,
            audit_score,
            variance: audit_score - operator_score,
            notes: notes.into(),
        }
    }
}

/// Recorded non-conformity or observation against an audit question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub id: Uuid,
    pub question_number: String,
    pub question_summary: String,
    #[serde(default)]
    pub auditor_assessment: String,
    #[serde(default)]
    pub auditor_score: i32,
    pub status: ComplianceStatus,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_self_assessment_comparison: Option<SelfAssessmentComparison>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_cause_analysis: Option<RootCauseAnalysis>,
}

impl AuditFinding {
    pub fn new(
        question_number: impl Into<String>,
        question_summary: impl Into<String>,
        status: ComplianceStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_number: question_number.into(),
            question_summary: question_summary.into(),
            auditor_assessment: String::new(),
            auditor_score: 0,
            status,
            evidence: Vec::new(),
            references: Vec::new(),
            operator_self_assessment_comparison: None,
            root_cause_analysis: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorFinding {
    pub id: Uuid,
    pub question_number: String,
    pub question_summary: String,
    pub operator_assessment: String,
    pub operator_response: String,
    pub score: i32,
    pub evidence_attached: bool,
}

/// Optional pre-audit self-assessment submitted by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorSelfAssessment {
    pub completed_at: DateTime<Utc>,
    pub completed_by: String,
    pub findings: Vec<OperatorFinding>,
    pub score: i32,
    /// Question number to free-text response
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}
