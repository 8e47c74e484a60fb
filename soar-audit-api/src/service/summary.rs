use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    AuditRecord, AuditReportSummary, AuditStatistics, AuditStatus, RiskLevel, SimpleAuditRecord,
    SimpleAuditStatistics,
};

use super::scoring::{round_half_up, simple_risk_scores};

pub fn audit_statistics(records: &[AuditRecord]) -> AuditStatistics {
    let mut stats = AuditStatistics {
        total_audits: records.len(),
        ..Default::default()
    };

    let mut score_sum = Decimal::ZERO;
    for record in records {
        match record.status {
            AuditStatus::Draft => stats.draft_audits += 1,
            AuditStatus::InProgress => stats.in_progress_audits += 1,
            AuditStatus::Closed => stats.completed_audits += 1,
            AuditStatus::Submitted | AuditStatus::Approved => {}
        }
        stats.total_findings += record.findings.len();
        *stats.audits_by_phase.entry(record.current_phase).or_default() += 1;
        score_sum += Decimal::from(record.normalized_score);
    }

    stats.average_score = mean(score_sum, records.len());
    stats
}

pub fn simple_audit_statistics(records: &[SimpleAuditRecord]) -> SimpleAuditStatistics {
    let mut stats = SimpleAuditStatistics {
        total_audits: records.len(),
        ..Default::default()
    };

    let mut net_risk_sum = Decimal::ZERO;
    for record in records {
        stats.total_findings += record.findings.len();
        for finding in &record.findings {
            match finding.severity {
                RiskLevel::Critical => stats.critical_findings += 1,
                RiskLevel::High => stats.high_findings += 1,
                _ => {}
            }
        }
        net_risk_sum += simple_risk_scores(&record.findings, &record.recommendations).net;
        stats.organizations.insert(record.organization_name.clone());
    }

    stats.average_risk_score = mean(net_risk_sum, records.len());
    stats
}

/// Report headline for `record`, given the size of its trail.
pub fn report_summary(
    record: &AuditRecord,
    audit_trail_entries: usize,
    generated_by: impl Into<String>,
) -> AuditReportSummary {
    let total_corrective_actions = record.corrective_actions.len();
    let completed_corrective_actions = record.completed_corrective_actions();

    let corrective_action_completion = if total_corrective_actions == 0 {
        0
    } else {
        let percent = round_half_up(
            Decimal::from(completed_corrective_actions * 100) / Decimal::from(total_corrective_actions),
        );
        percent.to_u8().unwrap_or(100)
    };

    AuditReportSummary {
        audit_id: record.id,
        generated_at: Utc::now(),
        generated_by: generated_by.into(),
        normalized_score: record.normalized_score,
        risk_profile: record.risk_profile,
        total_findings: record.findings.len(),
        total_corrective_actions,
        completed_corrective_actions,
        corrective_action_completion,
        signatures_collected: record.signatures.len(),
        audit_trail_entries,
    }
}

fn mean(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (sum / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuditFinding, AuditPhase, AuditType, ComplianceStatus, CorrectiveAction, FinalStatus,
        NewAuditRecord, NewSimpleAudit, SimpleFinding,
    };
    use crate::service::scoring::refresh_derived_fields;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn scored_record(status: AuditStatus, finding: Option<ComplianceStatus>) -> AuditRecord {
        let mut record = NewAuditRecord::for_organization("Skyline Air", AuditType::Iosa).into_record();
        record.status = status;
        if let Some(compliance) = finding {
            record.findings.push(AuditFinding::new("3.005", "Roles", compliance));
        }
        refresh_derived_fields(&mut record);
        record
    }

    #[test]
    fn test_empty_store_statistics() {
        let stats = audit_statistics(&[]);
        assert_eq!(stats.total_audits, 0);
        assert_eq!(stats.average_score, Decimal::ZERO);
        assert!(stats.audits_by_phase.is_empty());
    }

    #[test]
    fn test_statistics_by_status_and_phase() {
        let records = vec![
            scored_record(AuditStatus::Draft, None),
            scored_record(AuditStatus::InProgress, Some(ComplianceStatus::Compliant)),
            scored_record(AuditStatus::Closed, Some(ComplianceStatus::NonConformity)),
        ];

        let stats = audit_statistics(&records);

        assert_eq!(stats.total_audits, 3);
        assert_eq!(stats.draft_audits, 1);
        assert_eq!(stats.in_progress_audits, 1);
        assert_eq!(stats.completed_audits, 1);
        assert_eq!(stats.total_findings, 2);
        assert_eq!(stats.audits_by_phase.get(&AuditPhase::Preparation), Some(&3));
        // (100 + 99 + 93) / 3
        assert_eq!(stats.average_score, Decimal::new(9733, 2));
    }

    #[test]
    fn test_report_summary_completion() {
        let mut record = scored_record(AuditStatus::InProgress, Some(ComplianceStatus::Observation));
        let finding_id = record.findings[0].id;
        let mut done = CorrectiveAction::propose(finding_id, "Retrain crew", RiskLevel::Low, "auditor-1");
        done.final_status = FinalStatus::Complete;
        record.corrective_actions.push(done);
        for _ in 0..2 {
            record
                .corrective_actions
                .push(CorrectiveAction::propose(finding_id, "Follow up", RiskLevel::Medium, "auditor-1"));
        }

        let summary = report_summary(&record, 4, "director-1");

        assert_eq!(summary.total_corrective_actions, 3);
        assert_eq!(summary.completed_corrective_actions, 1);
        assert_eq!(summary.corrective_action_completion, 33);
        assert_eq!(summary.audit_trail_entries, 4);
        assert_eq!(summary.generated_by, "director-1");
    }

    #[test]
    fn test_simple_statistics() {
        let audit = |org: &str, severity: RiskLevel| {
            NewSimpleAudit {
                organization_name: org.to_string(),
                audit_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                audit_scope: "Line maintenance".to_string(),
                auditor_name: "J. Doe".to_string(),
                findings: vec![SimpleFinding {
                    id: Uuid::new_v4(),
                    category: "Maintenance".to_string(),
                    description: "Torque records incomplete".to_string(),
                    severity,
                    evidence: String::new(),
                }],
                recommendations: Vec::new(),
                overall_rating: "satisfactory".to_string(),
            }
            .into_record()
        };

        let records = vec![
            audit("Skyline Air", RiskLevel::Critical),
            audit("Skyline Air", RiskLevel::High),
            audit("Coastal Cargo", RiskLevel::Low),
        ];
        let stats = simple_audit_statistics(&records);

        assert_eq!(stats.total_audits, 3);
        assert_eq!(stats.critical_findings, 1);
        assert_eq!(stats.high_findings, 1);
        assert_eq!(stats.organizations.len(), 2);
        // (10 + 7 + 1) / 3
        assert_eq!(stats.average_risk_score, Decimal::from(6));
    }
}
