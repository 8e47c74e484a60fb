use soar_audit_api::{AuditError, AuditResult, ChecklistVersion, NewChecklistVersion};
use tracing::info;

use super::repo_impl::ChecklistRepositoryImpl;

impl ChecklistRepositoryImpl {
    /// Stores a new version. A version number already taken within the same
    /// checklist family is a validation error.
    pub async fn create_version(&self, new: NewChecklistVersion) -> AuditResult<ChecklistVersion> {
        let mut versions = self.versions_for_update().await?;
        if versions
            .iter()
            .any(|v| v.checklist_id == new.checklist_id && v.version == new.version)
        {
            return Err(AuditError::ValidationError(format!(
                "checklist {} already has a version {}",
                new.checklist_id, new.version
            )));
        }

        let version = new.into_version();
        versions.push(version.clone());
        self.versions.save_all(&versions).await?;

        info!(
            checklist_id = %version.checklist_id,
            version = version.version,
            "checklist version created"
        );
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{new_version, setup_checklists};
    use soar_audit_api::AuditError;

    #[tokio::test]
    async fn test_create_version() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();

        let created = repo.create_version(new_version("easa", 1)?).await?;
        assert_eq!(created.checklist_id, "easa");

        let versions = repo.load_all().await;
        assert_eq!(versions.len(), 3);
        assert_eq!(versions.last(), Some(&created));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_version_number() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();

        let result = repo.create_version(new_version("iosa", 1)?).await;
        assert!(matches!(result, Err(AuditError::ValidationError(_))));
        Ok(())
    }
}
