use async_trait::async_trait;
use soar_audit_api::SimpleAuditRecord;

use crate::repository::load_page::LoadPage;
use crate::repository::pagination::{paginate_newest_first, Page, PageRequest};

use super::repo_impl::SimpleAuditRepositoryImpl;

impl SimpleAuditRepositoryImpl {
    /// Submission history, most recent first.
    pub async fn history(&self, page: PageRequest) -> Page<SimpleAuditRecord> {
        self.load_page(page).await
    }
}

#[async_trait]
impl LoadPage<SimpleAuditRecord> for SimpleAuditRepositoryImpl {
    async fn load_page(&self, page: PageRequest) -> Page<SimpleAuditRecord> {
        paginate_newest_first(self.audits.load_all().await, page)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{new_simple_audit, setup_simple};
    use crate::repository::pagination::PageRequest;

    #[tokio::test]
    async fn test_history_newest_first() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_simple();
        for name in ["First Air", "Second Air"] {
            repo.save(new_simple_audit(name)).await?;
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let page = repo.history(PageRequest::default()).await;

        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].organization_name, "Second Air");
        assert_eq!(page.items[1].organization_name, "First Air");
        Ok(())
    }
}
