use async_trait::async_trait;
use soar_audit_api::AuditRecord;

use crate::repository::load_page::LoadPage;
use crate::repository::pagination::{paginate_newest_first, Page, PageRequest};

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Page `page_number` (1-based) of audits, newest first.
    pub async fn list(&self, page_number: usize, page_size: usize) -> Page<AuditRecord> {
        self.load_page(PageRequest::for_page(page_size, page_number))
            .await
    }
}

#[async_trait]
impl LoadPage<AuditRecord> for AuditRecordRepositoryImpl {
    async fn load_page(&self, page: PageRequest) -> Page<AuditRecord> {
        paginate_newest_first(self.audits.load_all().await, page)
    }
}
