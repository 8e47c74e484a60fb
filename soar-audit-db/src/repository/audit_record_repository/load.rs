use async_trait::async_trait;
use soar_audit_api::AuditRecord;
use uuid::Uuid;

use crate::repository::exist_by_ids::ExistByIds;
use crate::repository::load::Load;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    pub(super) async fn load_impl(repo: &AuditRecordRepositoryImpl, id: Uuid) -> Option<AuditRecord> {
        repo.audits
            .load_all()
            .await
            .into_iter()
            .find(|audit| audit.id == id)
    }
}

#[async_trait]
impl Load<AuditRecord> for AuditRecordRepositoryImpl {
    async fn load(&self, id: Uuid) -> Option<AuditRecord> {
        Self::load_impl(self, id).await
    }
}

#[async_trait]
impl ExistByIds for AuditRecordRepositoryImpl {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> Vec<(Uuid, bool)> {
        let audits = self.audits.load_all().await;
        ids.iter()
            .map(|id| (*id, audits.iter().any(|audit| audit.id == *id)))
            .collect()
    }
}
