use tokio::task::JoinHandle;

use crate::domain::{FeedCategory, Item, ItemId};
use crate::fetcher::NetworkError;
use crate::pagination::PageWindow;
use crate::query::NavQuery;

/// Immutable description of one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub category: FeedCategory,
    /// 1-based.
    pub page: u32,
    pub page_size: usize,
    /// Whether `type` was present in the navigation query. Pagination links
    /// only carry the category when it was.
    pub category_in_query: bool,
}

impl PageRequest {
    pub fn from_query(query: NavQuery, page_size: usize) -> Self {
        Self {
            category: query.category,
            page: query.page,
            page_size,
            category_in_query: query.category_in_query,
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.page_size)
    }
}

/// One in-flight item resolution bound to its slot.
#[derive(Debug)]
pub struct ItemTask {
    pub position: usize,
    pub id: ItemId,
    pub handle: JoinHandle<Result<Item, NetworkError>>,
}

/// Output of a successful list resolution, consumed by the renderer.
#[derive(Debug)]
pub struct PageResult {
    /// Length of the full id list.
    pub total: usize,
    pub window: PageWindow,
    pub items: Vec<ItemTask>,
}
