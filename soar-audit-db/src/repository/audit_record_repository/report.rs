use soar_audit_api::{report_summary, AuditReportSummary};
use uuid::Uuid;

use crate::repository::load::Load;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Headline numbers for the report screen, `None` for an unknown audit.
    pub async fn report_summary(
        &self,
        audit_id: Uuid,
        generated_by: &str,
    ) -> Option<AuditReportSummary> {
        let audit = self.load(audit_id).await?;
        let trail_entries = self.trail.count(audit_id).await;
        Some(report_summary(&audit, trail_entries, generated_by))
    }
}
