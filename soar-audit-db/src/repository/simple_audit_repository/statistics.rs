use soar_audit_api::{simple_audit_statistics, SimpleAuditStatistics};

use super::repo_impl::SimpleAuditRepositoryImpl;

impl SimpleAuditRepositoryImpl {
    pub async fn statistics(&self) -> SimpleAuditStatistics {
        simple_audit_statistics(&self.audits.load_all().await)
    }
}
