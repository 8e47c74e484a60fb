use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::risk::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

impl RecommendationPriority {
    /// Mitigation credit of a recommendation.
    pub fn weight(&self) -> Decimal {
        match self {
            RecommendationPriority::Low => Decimal::from(1),
            RecommendationPriority::Medium => Decimal::from(3),
            RecommendationPriority::High => Decimal::from(5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationPriority::Low => "Low",
            RecommendationPriority::Medium => "Medium",
            RecommendationPriority::High => "High",
        }
    }

    /// Badge bucket in rendered reports.
    pub fn display_level(&self) -> RiskLevel {
        match self {
            RecommendationPriority::Low => RiskLevel::Low,
            RecommendationPriority::Medium => RiskLevel::Medium,
            RecommendationPriority::High => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFinding {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub severity: RiskLevel,
    #[serde(default)]
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub action: String,
    pub responsible: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub priority: RecommendationPriority,
}

/// Flat, phase-less audit record captured by the single-form workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAuditRecord {
    pub id: Uuid,
    pub organization_name: String,
    pub audit_date: NaiveDate,
    #[serde(default)]
    pub audit_scope: String,
    #[serde(default)]
    pub auditor_name: String,
    #[serde(default)]
    pub findings: Vec<SimpleFinding>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub overall_rating: String,
    pub submitted_at: DateTime<Utc>,
}

/// Everything of a [`SimpleAuditRecord`] except the store-assigned id and
/// submission stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSimpleAudit {
    pub organization_name: String,
    pub audit_date: NaiveDate,
    pub audit_scope: String,
    pub auditor_name: String,
    pub findings: Vec<SimpleFinding>,
    pub recommendations: Vec<Recommendation>,
    pub overall_rating: String,
}

impl NewSimpleAudit {
    pub fn into_record(self) -> SimpleAuditRecord {
        SimpleAuditRecord {
            id: Uuid::new_v4(),
            organization_name: self.organization_name,
            audit_date: self.audit_date,
            audit_scope: self.audit_scope,
            auditor_name: self.auditor_name,
            findings: self.findings,
            recommendations: self.recommendations,
            overall_rating: self.overall_rating,
            submitted_at: Utc::now(),
        }
    }
}

/// Shallow partial update of a [`SimpleAuditRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleAuditUpdate {
    pub organization_name: Option<String>,
    pub audit_date: Option<NaiveDate>,
    pub audit_scope: Option<String>,
    pub auditor_name: Option<String>,
    pub findings: Option<Vec<SimpleFinding>>,
    pub recommendations: Option<Vec<Recommendation>>,
    pub overall_rating: Option<String>,
}

impl SimpleAuditUpdate {
    pub fn apply_to(self, record: &mut SimpleAuditRecord) {
        if let Some(v) = self.organization_name {
            record.organization_name = v;
        }
        if let Some(v) = self.audit_date {
            record.audit_date = v;
        }
        if let Some(v) = self.audit_scope {
            record.audit_scope = v;
        }
        if let Some(v) = self.auditor_name {
            record.auditor_name = v;
        }
        if let Some(v) = self.findings {
            record.findings = v;
        }
        if let Some(v) = self.recommendations {
            record.recommendations = v;
        }
        if let Some(v) = self.overall_rating {
            record.overall_rating = v;
        }
    }
}
