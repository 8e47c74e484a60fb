use async_trait::async_trait;
use soar_audit_api::AuditResult;
use uuid::Uuid;

use crate::repository::delete::Delete;

use super::repo_impl::SimpleAuditRepositoryImpl;

#[async_trait]
impl Delete for SimpleAuditRepositoryImpl {
    async fn delete(&self, id: Uuid) -> AuditResult<bool> {
        let mut audits = self.audits.load_all().await;
        let before = audits.len();
        audits.retain(|audit| audit.id != id);
        if audits.len() == before {
            return Ok(false);
        }

        self.audits.save_all(&audits).await?;
        Ok(true)
    }
}
