//! Id-list and item resolution for one page.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{FeedCategory, Item, ItemId, ItemTask, PageRequest, PageResult};
use crate::fetcher::{decode, Fetcher, NetworkError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The category's id list could not be read; no page can be built.
    #[error("{source}")]
    IdList {
        category: FeedCategory,
        source: NetworkError,
    },
}

pub struct ListResolver {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    endpoint: String,
}

impl ListResolver {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { fetcher, endpoint }
    }

    pub fn list_url(&self, category: &FeedCategory) -> String {
        format!("{}/{}.json", self.endpoint, category)
    }

    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/item/{}.json", self.endpoint, id)
    }

    /// Fetch the id list, slice it to the requested window and launch one
    /// item fetch per id. Item tasks are returned in list order and are not
    /// awaited here.
    pub async fn resolve(&self, request: &PageRequest) -> Result<PageResult, ListError> {
        let ids = self.fetch_ids(&request.category).await.map_err(|source| {
            tracing::warn!("Failed to load {} list: {}", request.category, source);
            ListError::IdList {
                category: request.category.clone(),
                source,
            }
        })?;

        let window = request.window();
        let slice = window.slice(&ids);
        tracing::info!(
            "{} list has {} ids, resolving {} in [{}, {})",
            request.category,
            ids.len(),
            slice.len(),
            window.start,
            window.end
        );

        let items = slice
            .iter()
            .enumerate()
            .map(|(position, &id)| ItemTask {
                position,
                id,
                handle: self.spawn_item(id),
            })
            .collect();

        Ok(PageResult {
            total: ids.len(),
            window,
            items,
        })
    }

    async fn fetch_ids(&self, category: &FeedCategory) -> Result<Vec<ItemId>, NetworkError> {
        let value = self.fetcher.fetch(&self.list_url(category)).await?;
        decode(value)
    }

    fn spawn_item(&self, id: ItemId) -> tokio::task::JoinHandle<Result<Item, NetworkError>> {
        let fetcher = self.fetcher.clone();
        let url = self.item_url(id);
        tracing::debug!("Fetching item {}", id);

        tokio::spawn(async move {
            let value = fetcher.fetch(&url).await?;
            decode::<Item>(value)
        })
    }
}
