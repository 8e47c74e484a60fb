use crate::models::timestamped::Timestamped;

/// Pagination request parameters for offset-based pagination
///
/// # Example
/// ```
/// use soar_audit_db::repository::pagination::PageRequest;
///
/// let page_request = PageRequest::new(20, 0); // First page with 20 items
/// let next_page = PageRequest::new(20, 20); // Second page
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Example
    /// ```
    /// use soar_audit_db::repository::pagination::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(10, 1); // offset: 0
    /// let page_2 = PageRequest::for_page(10, 2); // offset: 10
    /// assert_eq!(page_2.offset, 10);
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }
}

impl Default for PageRequest {
    /// First page of ten, the history view's default
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Paginated response containing items and metadata
///
/// # Example
/// ```
/// use soar_audit_db::repository::pagination::Page;
///
/// let page = Page {
///     items: vec![1, 2, 3],
///     total: 100,
///     limit: 20,
///     offset: 0,
/// };
///
/// assert_eq!(page.has_more(), true);
/// assert_eq!(page.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum number of items per page
    pub limit: usize,
    /// Number of items skipped before this page
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

/// Sorts `items` newest first and cuts out the requested window.
///
/// Ties keep their stored order. An offset past the end yields an empty page
/// that still reports the full total.
pub fn paginate_newest_first<T: Timestamped>(mut items: Vec<T>, page: PageRequest) -> Page<T> {
    items.sort_by_key(|item| std::cmp::Reverse(item.created_at()));
    let total = items.len();
    let window = items
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect();
    Page::new(window, total, page.limit, page.offset)
}
