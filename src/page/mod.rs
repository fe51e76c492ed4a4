//! One page load: query → window → resolution → render, or the error view.

use std::sync::Arc;

use crate::config::{feed_label, Config, ConfigError, FeedEntry};
use crate::domain::PageRequest;
use crate::fetcher::Fetcher;
use crate::pagination::Paginator;
use crate::query::QueryParser;
use crate::render::{error_view, RenderSummary, Renderer};
use crate::resolver::{ListError, ListResolver};
use crate::view::ViewPort;

#[derive(Debug)]
pub enum PageOutcome {
    Rendered {
        request: PageRequest,
        summary: RenderSummary,
        total: usize,
        total_pages: usize,
    },
    Failed {
        request: PageRequest,
        error: ListError,
    },
}

impl PageOutcome {
    pub fn request(&self) -> &PageRequest {
        match self {
            PageOutcome::Rendered { request, .. } | PageOutcome::Failed { request, .. } => request,
        }
    }
}

pub struct PageLoader {
    parser: QueryParser,
    resolver: ListResolver,
    renderer: Renderer,
    page_size: usize,
    feeds: Vec<FeedEntry>,
}

impl PageLoader {
    pub fn new(config: &Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            parser: QueryParser::new(config.default_category()?),
            resolver: ListResolver::new(fetcher, config.api.endpoint.as_str()),
            renderer: Renderer::new(config.api.discussion_base.as_str()),
            page_size: config.page.size,
            feeds: config.feeds.clone(),
        })
    }

    pub fn request_for(&self, query: &str) -> PageRequest {
        PageRequest::from_query(self.parser.parse(query), self.page_size)
    }

    pub async fn load<V: ViewPort + ?Sized>(&self, query: &str, view: &mut V) -> PageOutcome {
        let request = self.request_for(query);
        self.load_request(request, view).await
    }

    pub async fn load_request<V: ViewPort + ?Sized>(
        &self,
        request: PageRequest,
        view: &mut V,
    ) -> PageOutcome {
        tracing::info!("Loading {} page {}", request.category, request.page);

        let result = match self.resolver.resolve(&request).await {
            Ok(result) => result,
            Err(error) => {
                error_view::show(view, &error);
                return PageOutcome::Failed { request, error };
            }
        };

        view.set_page_title(&feed_label(&self.feeds, &request.category));
        view.mark_active_feed(&request.category);

        let total = result.total;
        let summary = self.renderer.render(view, &request, result).await;
        tracing::info!(
            "Rendered {} page {}: {} painted, {} failed",
            request.category,
            request.page,
            summary.painted,
            summary.failed
        );

        PageOutcome::Rendered {
            total_pages: Paginator::new(self.page_size).total_pages(total),
            request,
            summary,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::LinkRel;
    use crate::test_utils::{MockFetcher, ENDPOINT};
    use crate::view::{HtmlDocument, PageState};

    fn config() -> Config {
        let mut config = Config::default();
        config.api.endpoint = ENDPOINT.to_string();
        config
    }

    fn loader(mock: MockFetcher) -> PageLoader {
        PageLoader::new(&config(), Arc::new(mock)).unwrap()
    }

    fn mock_with_items(category: &str, count: u64) -> MockFetcher {
        let ids: Vec<u64> = (1..=count).collect();
        let mock = MockFetcher::new().with_list(category, &ids);
        for id in ids {
            mock.insert_item(id);
        }
        mock
    }

    #[tokio::test]
    async fn test_load_renders_requested_page() {
        let loader = loader(mock_with_items("newstories", 65));
        let mut page = PageState::new();

        let outcome = loader.load("?type=newstories&page=2", &mut page).await;

        match outcome {
            PageOutcome::Rendered {
                summary,
                total,
                total_pages,
                ..
            } => {
                assert_eq!(summary.painted, 30);
                assert_eq!(total, 65);
                assert_eq!(total_pages, 3);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(page.page_title.as_deref(), Some("New"));
        assert_eq!(page.active_feed.as_ref().unwrap().as_str(), "newstories");
        assert_eq!(page.slots[0].as_ref().unwrap().title, "Story 31");

        let hrefs: Vec<_> = page.nav_links.iter().map(|l| (l.rel, l.href.as_str())).collect();
        assert_eq!(
            hrefs,
            vec![
                (LinkRel::Prev, "?type=newstories&page=1"),
                (LinkRel::Next, "?type=newstories&page=3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_default_feed() {
        let loader = loader(mock_with_items("topstories", 5));
        let mut page = PageState::new();

        let outcome = loader.load("", &mut page).await;

        assert_eq!(outcome.request().category.as_str(), "topstories");
        assert_eq!(outcome.request().page, 1);
        assert_eq!(page.page_title.as_deref(), Some("Top"));
        assert_eq!(page.painted_count(), 5);
        assert!(page.nav_links.is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_renders_single_error_block() {
        let mock = MockFetcher::new().with_status(&format!("{}/topstories.json", ENDPOINT), 500);
        let loader = loader(mock);
        let mut doc = HtmlDocument::new("Hacker News", config().feeds);

        let outcome = loader.load("?page=1", &mut doc).await;

        assert!(matches!(outcome, PageOutcome::Failed { .. }));
        let html = doc.render();
        assert_eq!(html.matches("alert alert-danger").count(), 1);
        assert!(html.contains("Internal Server Error"));
        assert!(!html.contains("<article"));
        assert!(doc.page().nav_links.is_empty());
    }

    #[tokio::test]
    async fn test_item_requests_follow_list_request() {
        let mock = Arc::new(mock_with_items("askstories", 3));
        let loader = PageLoader::new(&config(), mock.clone()).unwrap();
        let mut page = PageState::new();

        loader.load("?type=askstories", &mut page).await;

        let calls = mock.calls();
        assert_eq!(calls[0], format!("{}/askstories.json", ENDPOINT));
        assert_eq!(calls.len(), 4);
    }
}
