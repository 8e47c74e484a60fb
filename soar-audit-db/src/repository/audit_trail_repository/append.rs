use soar_audit_api::{AuditResult, AuditTrailEntry, TrailEntryDraft};
use tracing::debug;
use uuid::Uuid;

use super::repo_impl::AuditTrailRepositoryImpl;

impl AuditTrailRepositoryImpl {
    /// Appends one entry for an existing audit.
    ///
    /// Returns `Ok(None)` without writing when the audit does not exist.
    pub async fn append(&self, draft: TrailEntryDraft) -> AuditResult<Option<AuditTrailEntry>> {
        let audit_exists = self
            .audits
            .load_all()
            .await
            .iter()
            .any(|audit| audit.id == draft.audit_id);
        if !audit_exists {
            debug!(audit_id = %draft.audit_id, action = %draft.action, "trail append skipped, unknown audit");
            return Ok(None);
        }

        let mut entries = Self::append_entries_impl(self, vec![draft]).await?;
        Ok(entries.pop())
    }

    /// Convenience form of [`Self::append`] for entries without a field change.
    pub async fn log(
        &self,
        audit_id: Uuid,
        user_id: &str,
        action: &str,
        description: &str,
    ) -> AuditResult<Option<AuditTrailEntry>> {
        self.append(TrailEntryDraft::new(audit_id, user_id, action, description))
            .await
    }

    /// Appends entries in one write. The caller guarantees the audits exist.
    pub(crate) async fn append_entries_impl(
        repo: &AuditTrailRepositoryImpl,
        drafts: Vec<TrailEntryDraft>,
    ) -> AuditResult<Vec<AuditTrailEntry>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let new_entries: Vec<AuditTrailEntry> =
            drafts.into_iter().map(TrailEntryDraft::into_entry).collect();

        let mut trail = repo.trail.load_for_update().await?;
        trail.extend(new_entries.iter().cloned());
        repo.trail.save_all(&trail).await?;

        Ok(new_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::setup_trail;
    use soar_audit_api::{AuditError, TrailEntryDraft};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_for_existing_audit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (trail_repo, audit_id) = setup_trail().await?;

        let entry = trail_repo
            .log(audit_id, "auditor-1", "exported", "CSV report exported")
            .await?
            .ok_or("entry not written")?;

        assert_eq!(entry.audit_id, audit_id);
        assert_eq!(entry.user_name, "auditor-1");
        assert_eq!(entry.action, "exported");
        Ok(())
    }

    #[tokio::test]
    async fn test_append_for_missing_audit_is_noop() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (trail_repo, _) = setup_trail().await?;
        let before = trail_repo.trail.load_all().await.len();

        let missing = Uuid::new_v4();
        let written = trail_repo
            .append(TrailEntryDraft::new(missing, "auditor-1", "exported", "CSV report exported"))
            .await?;

        assert!(written.is_none());
        assert_eq!(trail_repo.trail.load_all().await.len(), before);
        Ok(())
    }

    #[tokio::test]
    async fn test_append_propagates_quota_failure() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (trail_repo, audit_id) = setup_trail().await?;
        let long = "x".repeat(64 * 1024);

        let result = trail_repo.log(audit_id, "auditor-1", "noted", &long).await;
        assert!(matches!(result, Err(AuditError::PersistenceError(_))));
        Ok(())
    }
}
