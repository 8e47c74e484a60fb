use soar_audit_api::AuditTrailEntry;
use uuid::Uuid;

use crate::repository::pagination::{paginate_newest_first, Page, PageRequest};

use super::repo_impl::AuditTrailRepositoryImpl;

impl AuditTrailRepositoryImpl {
    /// Entries of `audit_id`, newest first.
    pub async fn query_page(&self, audit_id: Uuid, page: PageRequest) -> Page<AuditTrailEntry> {
        paginate_newest_first(self.query(audit_id).await, page)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::setup_trail;
    use crate::repository::pagination::PageRequest;

    #[tokio::test]
    async fn test_query_page_newest_first() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (trail_repo, audit_id) = setup_trail().await?;
        for i in 0..4 {
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
            trail_repo
                .log(audit_id, "auditor-1", &format!("note_{i}"), "note")
                .await?;
        }

        let page = trail_repo.query_page(audit_id, PageRequest::new(2, 0)).await;

        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].action, "note_3");
        assert_eq!(page.items[1].action, "note_2");
        assert!(page.has_more());
        Ok(())
    }
}
