pub mod card;
pub mod error_view;
pub mod timeago;

pub use card::StoryCard;

use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::domain::{PageRequest, PageResult};
use crate::pagination::Paginator;
use crate::view::ViewPort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub painted: usize,
    /// Slots whose item fetch failed; they stay reserved but empty.
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    discussion_base: String,
}

impl Renderer {
    pub fn new(discussion_base: impl Into<String>) -> Self {
        Self {
            discussion_base: discussion_base.into(),
        }
    }

    /// Paint every item task into its own slot as it settles, then append
    /// the pagination links.
    ///
    /// Slots are reserved in list order before anything is awaited, so the
    /// final order never depends on which response arrives first.
    pub async fn render<V: ViewPort + ?Sized>(
        &self,
        view: &mut V,
        request: &PageRequest,
        result: PageResult,
    ) -> RenderSummary {
        let PageResult {
            total,
            window,
            items,
        } = result;

        view.remove_loading_indicator();
        for task in &items {
            view.reserve_slot(task.position);
        }

        let mut pending: FuturesUnordered<_> = items
            .into_iter()
            .map(|task| async move { (task.position, task.id, task.handle.await) })
            .collect();

        let mut summary = RenderSummary::default();
        while let Some((position, id, outcome)) = pending.next().await {
            match outcome {
                Ok(Ok(item)) => {
                    let card = StoryCard::new(
                        &item,
                        position,
                        window.start,
                        &self.discussion_base,
                        Utc::now(),
                    );
                    view.paint_slot(position, &card);
                    summary.painted += 1;
                }
                Ok(Err(e)) => {
                    tracing::warn!("Item {} (slot {}) failed: {}", id, position, e);
                    summary.failed += 1;
                }
                Err(e) => {
                    tracing::error!("Task join error for item {}: {}", id, e);
                    summary.failed += 1;
                }
            }
        }

        for link in Paginator::new(request.page_size).links(request, total) {
            view.append_nav_link(&link);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::FeedCategory;
    use crate::pagination::{LinkRel, PaginationLink};
    use crate::resolver::ListResolver;
    use crate::test_utils::{item_url, MockFetcher, ENDPOINT};
    use crate::view::PageState;

    const DISCUSSION: &str = "https://news.test/item";

    /// Records the order slots are painted in.
    struct TracingView {
        page: PageState,
        painted: mpsc::UnboundedSender<usize>,
    }

    impl ViewPort for TracingView {
        fn reserve_slot(&mut self, position: usize) {
            self.page.reserve_slot(position);
        }
        fn paint_slot(&mut self, position: usize, card: &StoryCard) {
            self.page.paint_slot(position, card);
            let _ = self.painted.send(position);
        }
        fn remove_loading_indicator(&mut self) {
            self.page.remove_loading_indicator();
        }
        fn append_nav_link(&mut self, link: &PaginationLink) {
            self.page.append_nav_link(link);
        }
        fn set_page_title(&mut self, title: &str) {
            self.page.set_page_title(title);
        }
        fn mark_active_feed(&mut self, category: &FeedCategory) {
            self.page.mark_active_feed(category);
        }
        fn render_error(&mut self, message: &str) {
            self.page.render_error(message);
        }
    }

    fn request(page: u32) -> PageRequest {
        PageRequest {
            category: FeedCategory::parse("topstories").unwrap(),
            page,
            page_size: 30,
            category_in_query: false,
        }
    }

    #[tokio::test]
    async fn test_slot_order_independent_of_arrival() {
        let mock = MockFetcher::new().with_list("topstories", &[10, 11, 12]);
        let mut gates = Vec::new();
        for id in [10, 11, 12] {
            mock.insert_item(id);
            gates.push(Some(mock.gate(&item_url(id))));
        }
        let resolver = ListResolver::new(Arc::new(mock), ENDPOINT);
        let request = request(1);
        let result = resolver.resolve(&request).await.unwrap();

        let (tx, mut painted) = mpsc::unbounded_channel();
        let mut view = TracingView {
            page: PageState::new(),
            painted: tx,
        };
        let renderer = Renderer::new(DISCUSSION);
        let render = tokio::spawn(async move {
            let summary = renderer.render(&mut view, &request, result).await;
            (summary, view.page)
        });

        for slot in [2, 0, 1] {
            gates[slot].take().unwrap().send(()).unwrap();
            assert_eq!(painted.recv().await, Some(slot));
        }

        let (summary, page) = render.await.unwrap();
        assert_eq!(summary, RenderSummary { painted: 3, failed: 0 });
        assert!(!page.loading);
        let titles: Vec<_> = page.painted().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Story 10", "Story 11", "Story 12"]);
        let ranks: Vec<_> = page.painted().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(page.nav_links.is_empty());
    }

    #[tokio::test]
    async fn test_failed_item_leaves_gap_and_pagination_still_renders() {
        let ids: Vec<u64> = (1..=65).collect();
        let mock = MockFetcher::new().with_list("topstories", &ids);
        for id in &ids {
            if *id != 32 {
                mock.insert_item(*id);
            }
        }
        let resolver = ListResolver::new(Arc::new(mock), ENDPOINT);
        let request = request(2);
        let result = resolver.resolve(&request).await.unwrap();

        let mut page = PageState::new();
        let summary = Renderer::new(DISCUSSION)
            .render(&mut page, &request, result)
            .await;

        assert_eq!(summary, RenderSummary { painted: 29, failed: 1 });
        assert_eq!(page.slots.len(), 30);
        assert!(page.slots[1].is_none());
        assert_eq!(page.slots[0].as_ref().unwrap().rank, 31);
        assert_eq!(page.slots[29].as_ref().unwrap().rank, 60);

        let rels: Vec<_> = page.nav_links.iter().map(|l| (l.rel, l.target_page)).collect();
        assert_eq!(rels, vec![(LinkRel::Prev, 1), (LinkRel::Next, 3)]);
    }

    #[tokio::test]
    async fn test_empty_window_still_paginates() {
        let mock = MockFetcher::new().with_list("topstories", &[1, 2, 3]);
        let resolver = ListResolver::new(Arc::new(mock), ENDPOINT);
        let request = request(2);
        let result = resolver.resolve(&request).await.unwrap();

        let mut page = PageState::new();
        let summary = Renderer::new(DISCUSSION)
            .render(&mut page, &request, result)
            .await;

        assert_eq!(summary.painted, 0);
        assert!(page.slots.is_empty());
        assert!(!page.loading);
        assert_eq!(page.nav_links.len(), 1);
        assert_eq!(page.nav_links[0].rel, LinkRel::Prev);
    }
}
