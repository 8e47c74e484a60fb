use soar_audit_api::ChecklistVersion;

use super::repo_impl::ChecklistRepositoryImpl;

impl ChecklistRepositoryImpl {
    /// Highest active version of `checklist_id`.
    pub async fn find_active(&self, checklist_id: &str) -> Option<ChecklistVersion> {
        self.load_all()
            .await
            .into_iter()
            .filter(|v| v.checklist_id == checklist_id && !v.is_archived())
            .max_by_key(|v| v.version)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::setup_checklists;

    #[tokio::test]
    async fn test_find_active() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (repo, _) = setup_checklists();

        let iosa = repo.find_active("iosa").await.ok_or("no active iosa")?;
        assert_eq!(iosa.version, 1);
        assert_eq!(iosa.questions.len(), 2);

        assert!(repo.find_active("unknown").await.is_none());
        Ok(())
    }
}
