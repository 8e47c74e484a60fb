use async_trait::async_trait;
use soar_audit_api::AuditResult;
use tracing::info;
use uuid::Uuid;

use crate::repository::delete::Delete;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    pub(super) async fn delete_impl(repo: &AuditRecordRepositoryImpl, id: Uuid) -> AuditResult<bool> {
        let audits = repo.audits.load_all().await;
        let before = audits.len();
        let remaining: Vec<_> = audits.into_iter().filter(|audit| audit.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        repo.audits.save_all(&remaining).await?;
        info!(audit_id = %id, "audit deleted");
        Ok(true)
    }
}

#[async_trait]
impl Delete for AuditRecordRepositoryImpl {
    /// Trail entries of the deleted audit are kept.
    async fn delete(&self, id: Uuid) -> AuditResult<bool> {
        Self::delete_impl(self, id).await
    }
}
