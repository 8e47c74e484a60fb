use soar_audit_api::{
    AuditError, AuditQuestion, AuditResult, ChecklistStatus, ChecklistVersion,
    NewChecklistVersion,
};
use tracing::{debug, info};

use crate::utils::content_hash;

use super::repo_impl::ChecklistRepositoryImpl;

impl ChecklistRepositoryImpl {
    /// Publishes `questions` as the next version of `checklist_id`.
    ///
    /// The active version is archived and `version + 1` becomes active, in a
    /// single write. When the questions hash the same as the active version's
    /// nothing is written and the active version is returned.
    pub async fn revise(
        &self,
        checklist_id: &str,
        questions: Vec<AuditQuestion>,
        actor_id: &str,
    ) -> AuditResult<ChecklistVersion> {
        let mut versions = self.versions_for_update().await?;

        let active_index = versions
            .iter()
            .enumerate()
            .filter(|(_, v)| v.checklist_id == checklist_id && !v.is_archived())
            .max_by_key(|(_, v)| v.version)
            .map(|(index, _)| index)
            .ok_or_else(|| {
                AuditError::NotFound(format!("no active version of checklist {checklist_id}"))
            })?;

        if content_hash(&versions[active_index].questions)? == content_hash(&questions)? {
            debug!(checklist_id, "checklist unchanged, keeping active version");
            return Ok(versions[active_index].clone());
        }

        let next_version = versions
            .iter()
            .filter(|v| v.checklist_id == checklist_id)
            .map(|v| v.version)
            .max()
            .unwrap_or(0)
            + 1;

        Self::archive_in_place(&mut versions[active_index], actor_id)?;
        let revised = NewChecklistVersion {
            checklist_id: checklist_id.to_string(),
            version: next_version,
            questions,
            status: ChecklistStatus::Active,
        }
        .into_version();
        versions.push(revised.clone());
        self.versions.save_all(&versions).await?;

        info!(checklist_id, version = next_version, actor_id, "checklist revised");
        Ok(revised)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{question, setup_checklists};
    use soar_audit_api::{AuditError, ChecklistStatus, RiskLevel};

    #[tokio::test]
    async fn test_unchanged_questions_are_a_no_op() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();
        let active = repo.find_active("iosa").await.ok_or("no active iosa")?;

        let revised = repo.revise("iosa", active.questions.clone(), "admin-1").await?;

        assert_eq!(revised, active);
        assert_eq!(repo.load_all().await.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_revision_archives_and_bumps() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();
        let previous = repo.find_active("iosa").await.ok_or("no active iosa")?;

        let mut questions = previous.questions.clone();
        questions.push(question("q3", "5.010", RiskLevel::Medium)?);
        let revised = repo.revise("iosa", questions, "admin-1").await?;

        assert_eq!(revised.version, 2);
        assert_eq!(revised.questions.len(), 3);
        assert_eq!(repo.find_active("iosa").await, Some(revised));

        let versions = repo.load_all().await;
        let old = versions
            .iter()
            .find(|v| v.id == previous.id)
            .ok_or("previous version missing")?;
        assert_eq!(old.status, ChecklistStatus::Archived);
        assert_eq!(old.questions, previous.questions);
        Ok(())
    }

    #[tokio::test]
    async fn test_revise_unknown_checklist() {
        let (repo, _) = setup_checklists();
        let result = repo.revise("unknown", Vec::new(), "admin-1").await;
        assert!(matches!(result, Err(AuditError::NotFound(_))));
    }
}
