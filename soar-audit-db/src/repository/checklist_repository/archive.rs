use chrono::Utc;
use soar_audit_api::{AuditError, AuditResult, ChecklistStatus, ChecklistVersion};
use tracing::info;
use uuid::Uuid;

use super::repo_impl::ChecklistRepositoryImpl;

impl ChecklistRepositoryImpl {
    pub(super) fn archive_in_place(
        version: &mut ChecklistVersion,
        actor_id: &str,
    ) -> AuditResult<()> {
        if version.is_archived() {
            return Err(AuditError::InvalidTransition(format!(
                "checklist {} version {} is already archived",
                version.checklist_id, version.version
            )));
        }
        version.status = ChecklistStatus::Archived;
        version.archived_at = Some(Utc::now());
        version.archived_by = Some(actor_id.to_string());
        Ok(())
    }

    /// Freezes a version. Returns `Ok(None)` for an unknown id.
    pub async fn archive(
        &self,
        version_id: Uuid,
        actor_id: &str,
    ) -> AuditResult<Option<ChecklistVersion>> {
        let mut versions = self.versions_for_update().await?;
        let Some(version) = versions.iter_mut().find(|v| v.id == version_id) else {
            return Ok(None);
        };

        Self::archive_in_place(version, actor_id)?;
        let archived = version.clone();
        self.versions.save_all(&versions).await?;

        info!(%version_id, actor_id, "checklist version archived");
        Ok(Some(archived))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::setup_checklists;
    use soar_audit_api::{AuditError, ChecklistStatus};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_archive_once() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();
        let faa = repo.find_active("faa").await.ok_or("no active faa")?;

        let archived = repo.archive(faa.id, "admin-1").await?.ok_or("version not found")?;
        assert_eq!(archived.status, ChecklistStatus::Archived);
        assert_eq!(archived.archived_by.as_deref(), Some("admin-1"));
        assert!(archived.archived_at.is_some());
        assert!(repo.find_active("faa").await.is_none());

        let again = repo.archive(faa.id, "admin-1").await;
        assert!(matches!(again, Err(AuditError::InvalidTransition(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_archive_unknown() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();
        assert!(repo.archive(Uuid::new_v4(), "admin-1").await?.is_none());
        Ok(())
    }
}
