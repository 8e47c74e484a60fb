use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::risk::RiskLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubFindingStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

/// Performance-creep finding raised when implementation validation shows the
/// root cause of a parent finding was not addressed.
///
/// `parent_finding_id` is a lookup reference, the sub-finding is owned by the
/// audit record, not by its parent finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFinding {
    pub id: Uuid,
    pub parent_finding_id: Uuid,
    pub description: String,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
    pub status: SubFindingStatus,
    /// When the performance creep was detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracked_at: Option<DateTime<Utc>>,
}

/// Caller-supplied part of a sub-finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubFinding {
    pub description: String,
    pub risk_level: RiskLevel,
    pub status: SubFindingStatus,
    pub tracked_at: Option<DateTime<Utc>>,
}

impl NewSubFinding {
    pub fn new(description: impl Into<String>, risk_level: RiskLevel) -> Self {
        Self {
            description: description.into(),
            risk_level,
            status: SubFindingStatus::Open,
            tracked_at: None,
        }
    }

    pub fn into_sub_finding(self, parent_finding_id: Uuid) -> SubFinding {
        SubFinding {
            id: Uuid::new_v4(),
            parent_finding_id,
            description: self.description,
            risk_level: self.risk_level,
            created_at: Utc::now(),
            status: self.status,
            tracked_at: self.tracked_at,
        }
    }
}
