use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::source::{Badge, ExportSource, RiskFigure};

const STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
.header { border-bottom: 3px solid #1f2937; padding-bottom: 20px; margin-bottom: 30px; }
.header h1 { margin: 0; color: #1f2937; font-size: 28px; }
.header p { margin: 5px 0; color: #666; }
.section { margin-bottom: 30px; page-break-inside: avoid; }
.section-title { background-color: #f3f4f6; padding: 10px 15px; font-size: 16px; font-weight: bold; color: #1f2937; margin-bottom: 15px; border-left: 4px solid #2563eb; }
.info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 20px; }
.info-item { padding: 10px; background-color: #f9fafb; border: 1px solid #e5e7eb; border-radius: 4px; }
.info-label { font-weight: bold; color: #374151; font-size: 12px; }
.info-value { margin-top: 5px; color: #1f2937; }
.risk-cards { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 15px; margin-bottom: 20px; }
.risk-card { padding: 15px; border-radius: 4px; text-align: center; border: 1px solid #e5e7eb; }
.risk-card.critical { background-color: #fee2e2; border-color: #fecaca; }
.risk-card.high { background-color: #fed7aa; border-color: #fdba74; }
.risk-card.medium { background-color: #fef3c7; border-color: #fcd34d; }
.risk-card.low { background-color: #dcfce7; border-color: #bbf7d0; }
.risk-label { font-size: 12px; color: #666; }
.risk-value { font-size: 28px; font-weight: bold; margin: 10px 0; }
table { width: 100%; border-collapse: collapse; margin-bottom: 15px; }
th { background-color: #f3f4f6; padding: 12px; text-align: left; font-weight: bold; color: #1f2937; font-size: 12px; border-bottom: 2px solid #d1d5db; }
td { padding: 12px; border-bottom: 1px solid #e5e7eb; }
.severity-low { background-color: #dcfce7; color: #166534; }
.severity-medium { background-color: #fef3c7; color: #854d0e; }
.severity-high { background-color: #fed7aa; color: #92400e; }
.severity-critical { background-color: #fee2e2; color: #991b1b; }
.badge { display: inline-block; padding: 4px 8px; border-radius: 3px; font-size: 11px; font-weight: bold; }
.footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid #e5e7eb; font-size: 12px; color: #666; }
@media print { body { margin: 0; } .no-print { display: none; } }
";

/// Printable HTML report with the same section order as the CSV export.
///
/// `generated_at` goes into the footer; passing it in keeps the output a pure
/// function of its arguments.
pub fn render_document<S: ExportSource + ?Sized>(source: &S, generated_at: DateTime<Utc>) -> String {
    let org = encode_text(source.organization_name());
    let audit_date = source.audit_date();
    let date = encode_text(&audit_date);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Audit Report - {org}</title>\n"));
    html.push_str(&format!("<style>\n{STYLESHEET}</style>\n</head>\n<body>\n"));
    html.push_str(&format!(
        "<div class=\"header\">\n<h1>SOAR+ Audit Report</h1>\n<p><strong>{org}</strong> | {date}</p>\n</div>\n"
    ));

    html.push_str("<div class=\"section\">\n<div class=\"section-title\">Audit Information</div>\n<div class=\"info-grid\">\n");
    for field in source.header_fields() {
        html.push_str(&format!(
            "<div class=\"info-item\"><div class=\"info-label\">{}</div><div class=\"info-value\">{}</div></div>\n",
            encode_text(field.label),
            encode_text(&field.value)
        ));
    }
    html.push_str("</div>\n</div>\n");

    html.push_str("<div class=\"section\">\n<div class=\"section-title\">Risk Assessment</div>\n<div class=\"risk-cards\">\n");
    for figure in source.risk_figures() {
        push_risk_card(&mut html, &figure);
    }
    html.push_str("</div>\n</div>\n");

    let findings = source.finding_rows();
    html.push_str(&format!(
        "<div class=\"section\">\n<div class=\"section-title\">Findings ({})</div>\n",
        findings.len()
    ));
    if findings.is_empty() {
        html.push_str("<p style=\"color: #999;\">No findings recorded</p>\n");
    } else {
        html.push_str("<table>\n<tr><th>Category</th><th>Description</th><th>Severity</th><th>Evidence</th></tr>\n");
        for row in &findings {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                encode_text(&row.category),
                encode_text(&row.description),
                badge(&row.severity),
                encode_text(&row.evidence)
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str("</div>\n");

    let actions = source.action_rows();
    html.push_str(&format!(
        "<div class=\"section\">\n<div class=\"section-title\">Corrective Actions ({})</div>\n",
        actions.len()
    ));
    if actions.is_empty() {
        html.push_str("<p style=\"color: #999;\">No corrective actions recorded</p>\n");
    } else {
        html.push_str("<table>\n<tr><th>Action</th><th>Responsible</th><th>Target Date</th><th>Priority</th></tr>\n");
        for row in &actions {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                encode_text(&row.action),
                encode_text(&row.responsible),
                encode_text(row.target_date.as_deref().unwrap_or("Not set")),
                badge(&row.priority)
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"footer\">\n<p>Generated on {}</p>\n<p>SOAR+ Audit System | Aviation Safety Management Platform</p>\n</div>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(
        "<div class=\"no-print\" style=\"margin-top: 20px; text-align: center;\">\n\
         <button onclick=\"window.print()\">Print / Save as PDF</button>\n\
         </div>\n</body>\n</html>\n",
    );

    html
}

fn badge(badge: &Badge) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        encode_double_quoted_attribute(&badge.css_class()),
        encode_text(badge.label)
    )
}

fn push_risk_card(html: &mut String, figure: &RiskFigure) {
    html.push_str(&format!(
        "<div class=\"risk-card {}\"><div class=\"risk-label\">{}</div><div class=\"risk-value\">{}</div></div>\n",
        encode_double_quoted_attribute(figure.level.as_str()),
        encode_text(figure.label),
        encode_text(&figure.value)
    ));
}

pub fn document_file_name<S: ExportSource + ?Sized>(source: &S) -> String {
    format!("audit-report-{}.html", source.audit_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AuditFinding, AuditType, ComplianceStatus, NewAuditRecord, NewSimpleAudit, RiskLevel,
        SimpleFinding,
    };
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_markup_in_content_is_escaped() {
        let audit = NewSimpleAudit {
            organization_name: "A&B <Air>".to_string(),
            audit_date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            audit_scope: String::new(),
            auditor_name: "<script>alert(1)</script>".to_string(),
            findings: Vec::new(),
            recommendations: Vec::new(),
            overall_rating: String::new(),
        }
        .into_record();

        let html = render_document(&audit, generated_at());

        assert!(html.contains("<strong>A&amp;B &lt;Air&gt;</strong>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_document_is_deterministic_and_escaped() {
        let audit = NewSimpleAudit {
            organization_name: "Skyline <Air>".to_string(),
            audit_date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            audit_scope: "Cabin".to_string(),
            auditor_name: "J. Doe".to_string(),
            findings: vec![SimpleFinding {
                id: Uuid::new_v4(),
                category: "Cabin Safety".to_string(),
                description: "Exit sign <unlit>".to_string(),
                severity: RiskLevel::Critical,
                evidence: String::new(),
            }],
            recommendations: Vec::new(),
            overall_rating: "unsatisfactory".to_string(),
        }
        .into_record();

        let first = render_document(&audit, generated_at());
        let second = render_document(&audit, generated_at());
        assert_eq!(first, second);

        assert!(first.contains("<title>Audit Report - Skyline &lt;Air&gt;</title>"));
        assert!(first.contains("Exit sign &lt;unlit&gt;"));
        assert!(first.contains("<span class=\"badge severity-critical\">Critical</span>"));
        assert!(first.contains("No corrective actions recorded"));
        assert!(first.contains("Generated on 2024-05-15 09:30:00 UTC"));
    }

    #[test]
    fn test_sections_in_order() {
        let mut record = NewAuditRecord::for_organization("Skyline Air", AuditType::Iosa).into_record();
        record
            .findings
            .push(AuditFinding::new("4.002", "Training oversight", ComplianceStatus::Observation));

        let html = render_document(&record, generated_at());
        let info = html.find("Audit Information").unwrap();
        let risk = html.find("Risk Assessment").unwrap();
        let findings = html.find("Findings (1)").unwrap();
        let actions = html.find("Corrective Actions (0)").unwrap();
        assert!(info < risk && risk < findings && findings < actions);
        assert!(html.contains("severity-medium"));
    }
}
