use async_trait::async_trait;
use soar_audit_api::SimpleAuditRecord;
use uuid::Uuid;

use crate::repository::load::Load;

use super::repo_impl::SimpleAuditRepositoryImpl;

#[async_trait]
impl Load<SimpleAuditRecord> for SimpleAuditRepositoryImpl {
    async fn load(&self, id: Uuid) -> Option<SimpleAuditRecord> {
        self.audits
            .load_all()
            .await
            .into_iter()
            .find(|audit| audit.id == id)
    }
}
