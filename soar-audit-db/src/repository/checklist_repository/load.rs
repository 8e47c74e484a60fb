use async_trait::async_trait;
use soar_audit_api::{default_checklists, AuditError, AuditResult, ChecklistVersion};
use tracing::{info, warn};
use uuid::Uuid;

use crate::repository::load::Load;
use crate::storage::SlotRead;

use super::repo_impl::ChecklistRepositoryImpl;

impl ChecklistRepositoryImpl {
    /// Every stored version. An absent or empty slot is seeded with the
    /// default IOSA and FAA checklists first. A slot that cannot be read
    /// reads as empty and is left untouched.
    pub async fn load_all(&self) -> Vec<ChecklistVersion> {
        match self.versions.read().await {
            SlotRead::Loaded(versions) if !versions.is_empty() => versions,
            SlotRead::Degraded(_) => Vec::new(),
            SlotRead::Missing | SlotRead::Loaded(_) => {
                let seeded = match Self::seeds() {
                    Ok(seeded) => seeded,
                    Err(err) => {
                        warn!(error = %err, "default checklists are invalid, nothing seeded");
                        return Vec::new();
                    }
                };
                match self.versions.save_all(&seeded).await {
                    Ok(()) => info!(count = seeded.len(), "seeded default checklists"),
                    Err(err) => warn!(error = %err, "failed to persist default checklists"),
                }
                seeded
            }
        }
    }

    /// Versions feeding a write. Seeds are supplied in memory for an absent
    /// slot and persisted by the caller's write; an unreadable slot is an
    /// error.
    pub(super) async fn versions_for_update(&self) -> AuditResult<Vec<ChecklistVersion>> {
        match self.versions.read().await {
            SlotRead::Loaded(versions) if !versions.is_empty() => Ok(versions),
            SlotRead::Missing | SlotRead::Loaded(_) => Self::seeds(),
            SlotRead::Degraded(reason) => Err(AuditError::PersistenceError(format!(
                "checklists are unreadable, refusing to overwrite them: {reason}"
            ))),
        }
    }

    fn seeds() -> AuditResult<Vec<ChecklistVersion>> {
        Ok(default_checklists()?
            .into_iter()
            .map(|new| new.into_version())
            .collect())
    }
}

#[async_trait]
impl Load<ChecklistVersion> for ChecklistRepositoryImpl {
    async fn load(&self, id: Uuid) -> Option<ChecklistVersion> {
        self.load_all()
            .await
            .into_iter()
            .find(|version| version.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{new_version, setup_checklists, setup_flaky_checklists};
    use crate::repository::load::Load;
    use crate::storage::CHECKLISTS_KEY;
    use soar_audit_api::{AuditError, ChecklistStatus};

    #[tokio::test]
    async fn test_empty_slot_is_seeded() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, store) = setup_checklists();
        assert!(!store.contains_key(CHECKLISTS_KEY));

        let versions = repo.load_all().await;
        let families: Vec<&str> = versions.iter().map(|v| v.checklist_id.as_str()).collect();
        assert_eq!(families, vec!["iosa", "faa"]);
        assert!(versions
            .iter()
            .all(|v| v.version == 1 && v.status == ChecklistStatus::Active));
        assert!(store.contains_key(CHECKLISTS_KEY));

        // Seeding happens once; ids stay stable
        let again = repo.load_all().await;
        assert_eq!(again, versions);

        let first = repo.load(versions[0].id).await.ok_or("version not found")?;
        assert_eq!(first, versions[0]);
        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_slot_is_not_reseeded() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, store) = setup_flaky_checklists();
        let easa = repo.create_version(new_version("easa", 1)?).await?;
        let before = repo.load_all().await;
        assert_eq!(before.len(), 3);

        store.fail_next_reads(1);
        assert!(repo.load_all().await.is_empty());

        let after = repo.load_all().await;
        assert_eq!(after, before);
        let families: Vec<&str> = after.iter().map(|v| v.checklist_id.as_str()).collect();
        assert_eq!(families, vec!["iosa", "faa", "easa"]);
        assert_eq!(repo.load(easa.id).await, Some(easa));
        Ok(())
    }

    #[tokio::test]
    async fn test_write_refuses_unreadable_slot() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, store) = setup_flaky_checklists();
        let before = repo.load_all().await;

        store.fail_next_reads(1);
        let result = repo.create_version(new_version("easa", 1)?).await;
        assert!(matches!(result, Err(AuditError::PersistenceError(_))));
        assert_eq!(repo.load_all().await, before);
        Ok(())
    }
}
