use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use super::phase::AuditPhase;
use super::risk::RiskProfile;

/// Dashboard figures over every phase-aware audit in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStatistics {
    pub total_audits: usize,
    pub draft_audits: usize,
    pub in_progress_audits: usize,
    /// Audits with status `closed`
    pub completed_audits: usize,
    pub total_findings: usize,
    pub audits_by_phase: BTreeMap<AuditPhase, usize>,
    /// Mean normalized score, two decimal places. Zero for an empty store.
    pub average_score: Decimal,
}

/// Headline numbers of one audit, as shown on the report screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReportSummary {
    pub audit_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub generated_by: String,
    pub normalized_score: u8,
    pub risk_profile: RiskProfile,
    pub total_findings: usize,
    pub total_corrective_actions: usize,
    pub completed_corrective_actions: usize,
    /// 0-100, zero when there are no corrective actions
    pub corrective_action_completion: u8,
    pub signatures_collected: usize,
    pub audit_trail_entries: usize,
}

/// Dashboard figures over the flat audit slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAuditStatistics {
    pub total_audits: usize,
    pub total_findings: usize,
    pub critical_findings: usize,
    pub high_findings: usize,
    pub average_risk_score: Decimal,
    pub organizations: BTreeSet<String>,
}
