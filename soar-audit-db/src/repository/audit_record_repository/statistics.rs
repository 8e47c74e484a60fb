use soar_audit_api::{audit_statistics, AuditStatistics};

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    pub async fn statistics(&self) -> AuditStatistics {
        audit_statistics(&self.audits.load_all().await)
    }
}
