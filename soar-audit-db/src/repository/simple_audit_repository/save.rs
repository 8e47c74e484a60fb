use soar_audit_api::{AuditResult, NewSimpleAudit, SimpleAuditRecord};
use tracing::info;

use super::repo_impl::SimpleAuditRepositoryImpl;

impl SimpleAuditRepositoryImpl {
    /// Stores a submitted form under a fresh id and submission stamp.
    pub async fn save(&self, audit: NewSimpleAudit) -> AuditResult<SimpleAuditRecord> {
        let record = audit.into_record();

        let mut audits = self.audits.load_for_update().await?;
        audits.push(record.clone());
        self.audits.save_all(&audits).await?;

        info!(audit_id = %record.id, organization = %record.organization_name, "simple audit saved");
        Ok(record)
    }
}
