use crate::domain::{AuditRecord, RiskLevel, SimpleAuditRecord};
use crate::service::scoring::simple_risk_scores;

/// Labelled value in the header block of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub label: &'static str,
    pub value: String,
}

/// Computed risk number shown on a risk card. `level` picks the card colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFigure {
    pub label: &'static str,
    pub value: String,
    pub level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingRow {
    pub category: String,
    pub description: String,
    pub severity: Badge,
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub action: String,
    pub responsible: String,
    pub target_date: Option<String>,
    pub priority: Badge,
}

/// Severity shown as a coloured badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub level: RiskLevel,
}

impl Badge {
    pub fn css_class(&self) -> String {
        severity_class(self.level)
    }
}

/// CSS class of a severity bucket, e.g. `severity-critical`.
pub fn severity_class(level: RiskLevel) -> String {
    format!("severity-{}", level.as_str())
}

/// Read-only view of an audit that the report renderers understand.
///
/// Both record shapes implement it, so CSV and document output share one
/// section order regardless of which workflow produced the audit.
pub trait ExportSource {
    fn organization_name(&self) -> &str;

    /// `YYYY-MM-DD`, also used in export file names
    fn audit_date(&self) -> String;

    fn header_fields(&self) -> Vec<HeaderField>;

    fn risk_figures(&self) -> Vec<RiskFigure>;

    fn finding_rows(&self) -> Vec<FindingRow>;

    fn action_rows(&self) -> Vec<ActionRow>;
}

impl ExportSource for SimpleAuditRecord {
    fn organization_name(&self) -> &str {
        &self.organization_name
    }

    fn audit_date(&self) -> String {
        self.audit_date.format("%Y-%m-%d").to_string()
    }

    fn header_fields(&self) -> Vec<HeaderField> {
        vec![
            field("Organization", self.organization_name.clone()),
            field("Audit Date", self.audit_date()),
            field("Auditor Name", self.auditor_name.clone()),
            field("Audit Scope", self.audit_scope.clone()),
            field("Overall Rating", self.overall_rating.clone()),
        ]
    }

    fn risk_figures(&self) -> Vec<RiskFigure> {
        let scores = simple_risk_scores(&self.findings, &self.recommendations);
        vec![
            RiskFigure {
                label: "Overall Risk Score",
                value: scores.overall_rounded().to_string(),
                level: RiskLevel::Critical,
            },
            RiskFigure {
                label: "Net Risk Score",
                value: scores.net_rounded().to_string(),
                level: RiskLevel::High,
            },
            RiskFigure {
                label: "Mitigation Impact",
                value: format!("{}%", scores.mitigation_rounded()),
                level: RiskLevel::Low,
            },
        ]
    }

    fn finding_rows(&self) -> Vec<FindingRow> {
        self.findings
            .iter()
            .map(|finding| FindingRow {
                category: finding.category.clone(),
                description: finding.description.clone(),
                severity: Badge {
                    label: finding.severity.label(),
                    level: finding.severity,
                },
                evidence: finding.evidence.clone(),
            })
            .collect()
    }

    fn action_rows(&self) -> Vec<ActionRow> {
        self.recommendations
            .iter()
            .map(|rec| ActionRow {
                action: rec.action.clone(),
                responsible: rec.responsible.clone(),
                target_date: rec.target_date.map(|d| d.format("%Y-%m-%d").to_string()),
                priority: Badge {
                    label: rec.priority.label(),
                    level: rec.priority.display_level(),
                },
            })
            .collect()
    }
}

impl ExportSource for AuditRecord {
    fn organization_name(&self) -> &str {
        &self.organization_name
    }

    fn audit_date(&self) -> String {
        self.audit_date.format("%Y-%m-%d").to_string()
    }

    fn header_fields(&self) -> Vec<HeaderField> {
        vec![
            field("Organization", self.organization_name.clone()),
            field("Audit Date", self.audit_date()),
            field("Audit Type", self.audit_type.to_string()),
            field("Program", self.program_type.as_str().to_string()),
            field("Current Phase", self.current_phase.to_string()),
            field("Status", self.status.to_string()),
            field("Created By", self.created_by.clone()),
        ]
    }

    fn risk_figures(&self) -> Vec<RiskFigure> {
        let mut figures = vec![RiskFigure {
            label: "Normalized Score",
            value: format!("{}%", self.normalized_score),
            level: RiskLevel::Low,
        }];
        figures.extend(RiskLevel::ALL.iter().map(|level| RiskFigure {
            label: match level {
                RiskLevel::Critical => "Critical Risks",
                RiskLevel::High => "High Risks",
                RiskLevel::Medium => "Medium Risks",
                RiskLevel::Low => "Low Risks",
            },
            value: self.risk_profile.count(*level).to_string(),
            level: *level,
        }));
        figures
    }

    fn finding_rows(&self) -> Vec<FindingRow> {
        self.findings
            .iter()
            .map(|finding| FindingRow {
                category: finding.question_number.clone(),
                description: finding.question_summary.clone(),
                severity: Badge {
                    label: finding.status.label(),
                    level: finding.status.display_level(),
                },
                evidence: finding.evidence.join("; "),
            })
            .collect()
    }

    fn action_rows(&self) -> Vec<ActionRow> {
        self.corrective_actions
            .iter()
            .map(|action| ActionRow {
                action: action.proposed_action.clone(),
                responsible: action.responsible_manager.clone(),
                target_date: action
                    .target_completion_date
                    .map(|d| d.format("%Y-%m-%d").to_string()),
                priority: Badge {
                    label: action.residual_risk_level.label(),
                    level: action.residual_risk_level,
                },
            })
            .collect()
    }
}

fn field(label: &'static str, value: String) -> HeaderField {
    HeaderField { label, value }
}
