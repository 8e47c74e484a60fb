use soar_audit_api::AuditTrailEntry;
use uuid::Uuid;

use super::repo_impl::AuditTrailRepositoryImpl;

impl AuditTrailRepositoryImpl {
    /// All entries of `audit_id` in insertion order.
    pub async fn query(&self, audit_id: Uuid) -> Vec<AuditTrailEntry> {
        self.trail
            .load_all()
            .await
            .into_iter()
            .filter(|entry| entry.audit_id == audit_id)
            .collect()
    }

    pub async fn count(&self, audit_id: Uuid) -> usize {
        self.trail
            .load_all()
            .await
            .iter()
            .filter(|entry| entry.audit_id == audit_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::setup_trail;

    #[tokio::test]
    async fn test_query_keeps_insertion_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (trail_repo, audit_id) = setup_trail().await?;

        for action in ["reviewed", "commented", "exported"] {
            trail_repo.log(audit_id, "auditor-1", action, action).await?;
        }

        let actions: Vec<String> = trail_repo
            .query(audit_id)
            .await
            .into_iter()
            .map(|entry| entry.action)
            .collect();
        assert_eq!(actions, vec!["created", "reviewed", "commented", "exported"]);
        assert_eq!(trail_repo.count(audit_id).await, 4);
        Ok(())
    }
}
