use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuditError, AuditResult};

use super::risk::RiskLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    #[default]
    Active,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStandard {
    Required,
    Recommended,
}

/// One question of a checklist version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditQuestion {
    pub id: String,
    /// Standard reference number, e.g. `3.005`
    pub number: HeaplessString<16>,
    pub summary: String,
    pub risk_rank: RiskLevel,
    pub category: HeaplessString<64>,
    pub standard: QuestionStandard,
    #[serde(default)]
    pub references: Vec<String>,
}

impl AuditQuestion {
    pub fn new(
        id: impl Into<String>,
        number: &str,
        summary: impl Into<String>,
        risk_rank: RiskLevel,
        category: &str,
        standard: QuestionStandard,
        references: Vec<String>,
    ) -> AuditResult<Self> {
        Ok(Self {
            id: id.into(),
            number: bounded(number, "number")?,
            summary: summary.into(),
            risk_rank,
            category: bounded(category, "category")?,
            standard,
            references,
        })
    }
}

fn bounded<const N: usize>(value: &str, field: &str) -> AuditResult<HeaplessString<N>> {
    HeaplessString::try_from(value).map_err(|_| {
        AuditError::ValidationError(format!(
            "question {field} '{value}' is too long (max {N} chars)"
        ))
    })
}

/// Versioned question set. Archived versions are never edited; changes go
/// into a new version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistVersion {
    pub id: Uuid,
    /// Stable checklist family, e.g. `iosa`
    pub checklist_id: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<AuditQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_by: Option<String>,
    pub status: ChecklistStatus,
}

impl ChecklistVersion {
    pub fn is_archived(&self) -> bool {
        self.status == ChecklistStatus::Archived
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChecklistVersion {
    pub checklist_id: String,
    pub version: u32,
    pub questions: Vec<AuditQuestion>,
    pub status: ChecklistStatus,
}

impl NewChecklistVersion {
    pub fn into_version(self) -> ChecklistVersion {
        ChecklistVersion {
            id: Uuid::new_v4(),
            checklist_id: self.checklist_id,
            version: self.version,
            created_at: Utc::now(),
            questions: self.questions,
            archived_at: None,
            archived_by: None,
            status: self.status,
        }
    }
}

/// Checklists seeded into an empty checklist slot.
pub fn default_checklists() -> AuditResult<Vec<NewChecklistVersion>> {
    let iosa = NewChecklistVersion {
        checklist_id: "iosa".to_string(),
        version: 1,
        status: ChecklistStatus::Active,
        questions: vec![
            AuditQuestion::new(
                "q1",
                "3.005",
                "Describe the roles and responsibilities of operations and airworthiness inspection",
                RiskLevel::Critical,
                "Organization",
                QuestionStandard::Required,
                vec!["IATA IOSA".to_string()],
            )?,
            AuditQuestion::new(
                "q2",
                "4.002",
                "Training center procedures and oversight",
                RiskLevel::High,
                "Training",
                QuestionStandard::Required,
                vec!["IATA IOSA".to_string()],
            )?,
        ],
    };

    let faa = NewChecklistVersion {
        checklist_id: "faa".to_string(),
        version: 1,
        status: ChecklistStatus::Active,
        questions: vec![AuditQuestion::new(
            "q3",
            "5.007",
            "Inspector technical guidance and standards",
            RiskLevel::High,
            "Operations",
            QuestionStandard::Required,
            vec!["FAA Regulations".to_string()],
        )?],
    };

    Ok(vec![iosa, faa])
}
