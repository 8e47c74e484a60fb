use soar_audit_api::{refresh_derived_fields, AuditRecord, AuditResult, NewAuditRecord, TrailEntryDraft};
use tracing::info;

use crate::repository::audit_trail_repository::AuditTrailRepositoryImpl;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Creates an audit in the `preparation` phase and logs `created`.
    ///
    /// Missing fields take their defaults. When the trail entry cannot be
    /// written the record is taken out again and the error returned.
    pub async fn create(&self, data: NewAuditRecord) -> AuditResult<AuditRecord> {
        let actor = data.created_by_actor();
        let mut record = data.into_record();
        refresh_derived_fields(&mut record);

        let mut audits = self.audits.load_for_update().await?;
        audits.push(record.clone());
        self.audits.save_all(&audits).await?;

        let created = TrailEntryDraft::new(record.id, actor, "created", "Audit created");
        if let Err(err) = AuditTrailRepositoryImpl::append_entries_impl(&self.trail, vec![created]).await {
            audits.pop();
            self.restore(&audits).await;
            return Err(err);
        }

        info!(audit_id = %record.id, organization = %record.organization_name, "audit created");
        Ok(record)
    }
}
