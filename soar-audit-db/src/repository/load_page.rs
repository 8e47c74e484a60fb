use async_trait::async_trait;

use crate::models::timestamped::Timestamped;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for newest-first paginated listing
///
/// # Example
/// ```ignore
/// let page = repo.load_page(PageRequest::for_page(10, 1)).await;
/// println!("{} of {} audits", page.items.len(), page.total);
/// ```
#[async_trait]
pub trait LoadPage<T: Timestamped>: Send + Sync {
    async fn load_page(&self, page: PageRequest) -> Page<T>;
}
