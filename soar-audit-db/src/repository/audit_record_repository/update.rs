use chrono::Utc;
use soar_audit_api::{refresh_derived_fields, AuditRecord, AuditRecordUpdate, AuditResult, TrailEntryDraft};
use tracing::info;
use uuid::Uuid;

use crate::repository::audit_trail_repository::AuditTrailRepositoryImpl;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Shallow merge of `update` into the stored record.
    ///
    /// Stamps `updated_at`, recomputes the derived score and risk profile and
    /// logs one `updated_<field>` trail entry per field present in `update`.
    /// Returns `Ok(None)` when the audit does not exist. On error the stored
    /// record is unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        update: AuditRecordUpdate,
        actor_id: &str,
    ) -> AuditResult<Option<AuditRecord>> {
        let mut audits = self.audits.load_for_update().await?;
        let Some(index) = audits.iter().position(|audit| audit.id == id) else {
            return Ok(None);
        };

        let mut record = audits[index].clone();
        let changes = update.apply_to(&mut record)?;
        refresh_derived_fields(&mut record);
        record.updated_at = Utc::now();

        let previous = std::mem::replace(&mut audits[index], record.clone());
        self.audits.save_all(&audits).await?;

        let field_count = changes.len();
        let drafts = changes
            .into_iter()
            .map(|change| TrailEntryDraft::for_change(id, actor_id, change))
            .collect();
        if let Err(err) = AuditTrailRepositoryImpl::append_entries_impl(&self.trail, drafts).await {
            audits[index] = previous;
            self.restore(&audits).await;
            return Err(err);
        }

        info!(audit_id = %id, actor = actor_id, fields = field_count, "audit updated");
        Ok(Some(record))
    }
}
