/// Pagination support for catalog queries
///
/// Every listing in the catalog is paged with the same fixed page size.
use serde::{Deserialize, Serialize};

/// Number of entities returned per page, for every entity type.
pub const PAGE_SIZE: u32 = 50;

/// Pagination parameters for queries. Pages are counted from zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0 }
    }
}

impl PageRequest {
    pub fn new(page: u32) -> Self {
        Self { page }
    }

    /// Offset into the full sorted listing.
    pub fn offset(&self) -> usize {
        self.page as usize * PAGE_SIZE as usize
    }

    pub fn limit(&self) -> usize {
        PAGE_SIZE as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: &PageRequest) -> Self {
        let total_pages = ((total_count as f64) / (PAGE_SIZE as f64)).ceil() as u32;

        Self {
            items,
            total_count,
            page: request.page,
            page_size: PAGE_SIZE,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
