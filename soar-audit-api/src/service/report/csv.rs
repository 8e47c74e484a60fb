use super::source::ExportSource;

/// Quotes `value` when it holds a comma, quote, CR or LF. Embedded quotes are
/// doubled.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let line = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Delimited report: header block, findings, corrective actions.
pub fn render_csv<S: ExportSource + ?Sized>(source: &S) -> String {
    let mut out = String::new();

    out.push_str("AUDIT REPORT\n");
    for field in source.header_fields() {
        push_row(&mut out, [field.label, field.value.as_str()]);
    }
    for figure in source.risk_figures() {
        push_row(&mut out, [figure.label, figure.value.as_str()]);
    }
    out.push('\n');

    out.push_str("FINDINGS\n");
    push_row(&mut out, ["Category", "Description", "Severity", "Evidence"]);
    for row in source.finding_rows() {
        push_row(
            &mut out,
            [
                row.category.as_str(),
                row.description.as_str(),
                row.severity.label,
                row.evidence.as_str(),
            ],
        );
    }
    out.push('\n');

    out.push_str("CORRECTIVE ACTIONS\n");
    push_row(&mut out, ["Action", "Responsible Party", "Target Date", "Priority"]);
    for row in source.action_rows() {
        push_row(
            &mut out,
            [
                row.action.as_str(),
                row.responsible.as_str(),
                row.target_date.as_deref().unwrap_or(""),
                row.priority.label,
            ],
        );
    }

    out
}

pub fn csv_file_name<S: ExportSource + ?Sized>(source: &S) -> String {
    format!("audit-report-{}.csv", source.audit_date())
}
