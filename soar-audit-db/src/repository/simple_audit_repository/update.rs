use soar_audit_api::{AuditResult, SimpleAuditRecord, SimpleAuditUpdate};
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::SimpleAuditRepositoryImpl;

impl SimpleAuditRepositoryImpl {
    /// Shallow merge of `update` into the stored audit. `Ok(None)` for an
    /// unknown id.
    pub async fn update(
        &self,
        id: Uuid,
        update: SimpleAuditUpdate,
    ) -> AuditResult<Option<SimpleAuditRecord>> {
        let mut audits = self.audits.load_for_update().await?;
        let Some(audit) = audits.iter_mut().find(|audit| audit.id == id) else {
            return Ok(None);
        };

        update.apply_to(audit);
        let updated = audit.clone();
        self.audits.save_all(&audits).await?;

        debug!(audit_id = %id, "simple audit updated");
        Ok(Some(updated))
    }
}
