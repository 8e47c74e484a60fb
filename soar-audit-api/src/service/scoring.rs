use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{AuditRecord, Recommendation, RiskAssessment, RiskProfile, SimpleFinding};

/// Compliance score of a phase-aware audit, 0-100.
///
/// Every finding deducts the weight of its score bucket (`compliant` counts
/// as low, everything else as high). Each corrective action with final status
/// `complete` then halves the deduction accumulated so far, in insertion
/// order. Half points round away from zero.
pub fn normalized_score(record: &AuditRecord) -> u8 {
    let mut deduction: Decimal = record
        .findings
        .iter()
        .map(|finding| finding.status.score_bucket().weight())
        .sum();

    for action in &record.corrective_actions {
        if action.is_complete() {
            deduction /= Decimal::TWO;
        }
    }

    let score = (Decimal::ONE_HUNDRED - deduction)
        .max(Decimal::ZERO)
        .min(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    score.to_u8().unwrap_or(0)
}

/// Tally of risk assessments by priority. Replaces any previous profile.
pub fn risk_profile(assessments: &[RiskAssessment]) -> RiskProfile {
    let mut profile = RiskProfile::default();
    for assessment in assessments {
        profile.record(assessment.priority);
    }
    profile
}

/// Recomputes the cached `normalized_score` and `risk_profile` of `record`.
pub fn refresh_derived_fields(record: &mut AuditRecord) {
    record.normalized_score = normalized_score(record);
    record.risk_profile = risk_profile(&record.risk_assessments);
}

/// Risk figures of a flat audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleRiskScores {
    /// Sum of finding severity weights
    pub overall: Decimal,
    /// Sum of recommendation priority weights
    pub action: Decimal,
    /// `max(0, overall - 0.7 * action)`
    pub net: Decimal,
    /// Share of the overall risk removed by the recommendations, 0-100
    pub mitigation_impact: Decimal,
}

impl SimpleRiskScores {
    pub fn overall_rounded(&self) -> Decimal {
        round_half_up(self.overall)
    }

    pub fn net_rounded(&self) -> Decimal {
        round_half_up(self.net)
    }

    pub fn mitigation_rounded(&self) -> Decimal {
        round_half_up(self.mitigation_impact)
    }
}

/// Net risk of a flat audit from its findings and recommendations.
pub fn simple_risk_scores(
    findings: &[SimpleFinding],
    recommendations: &[Recommendation],
) -> SimpleRiskScores {
    let overall: Decimal = findings.iter().map(|f| f.severity.weight()).sum();
    let action: Decimal = recommendations.iter().map(|r| r.priority.weight()).sum();
    let net = (overall - action * Decimal::new(7, 1)).max(Decimal::ZERO);

    let mitigation_impact = if overall.is_zero() {
        Decimal::ZERO
    } else {
        (overall - net) / overall * Decimal::ONE_HUNDRED
    };

    SimpleRiskScores {
        overall,
        action,
        net,
        mitigation_impact,
    }
}

pub(crate) fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
