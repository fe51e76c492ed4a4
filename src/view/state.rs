use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::FeedCategory;
use crate::pagination::PaginationLink;
use crate::render::StoryCard;
use crate::view::ViewPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// One entry per reserved slot; `None` until painted.
    pub slots: Vec<Option<StoryCard>>,
    pub nav_links: Vec<PaginationLink>,
    pub page_title: Option<String>,
    pub active_feed: Option<FeedCategory>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            nav_links: Vec::new(),
            page_title: None,
            active_feed: None,
            error: None,
            loading: true,
        }
    }

    pub fn painted(&self) -> impl Iterator<Item = &StoryCard> {
        self.slots.iter().flatten()
    }

    pub fn painted_count(&self) -> usize {
        self.painted().count()
    }
}

impl ViewPort for PageState {
    fn reserve_slot(&mut self, position: usize) {
        if self.slots.len() <= position {
            self.slots.resize(position + 1, None);
        }
    }

    fn paint_slot(&mut self, position: usize, card: &StoryCard) {
        self.reserve_slot(position);
        self.slots[position] = Some(card.clone());
    }

    fn remove_loading_indicator(&mut self) {
        self.loading = false;
    }

    fn append_nav_link(&mut self, link: &PaginationLink) {
        self.nav_links.push(link.clone());
    }

    fn set_page_title(&mut self, title: &str) {
        self.page_title = Some(title.to_string());
    }

    fn mark_active_feed(&mut self, category: &FeedCategory) {
        self.active_feed = Some(category.clone());
    }

    fn render_error(&mut self, message: &str) {
        self.slots.clear();
        self.loading = false;
        self.error = Some(message.to_string());
    }
}

/// A [`PageState`] shared between a loading task and a reader.
#[derive(Debug, Clone, Default)]
pub struct SharedPage(Arc<Mutex<PageState>>);

impl SharedPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the page for reading. A poisoned lock still yields the state.
    pub fn lock(&self) -> MutexGuard<'_, PageState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }
}

impl ViewPort for SharedPage {
    fn reserve_slot(&mut self, position: usize) {
        self.lock().reserve_slot(position);
    }

    fn paint_slot(&mut self, position: usize, card: &StoryCard) {
        self.lock().paint_slot(position, card);
    }

    fn remove_loading_indicator(&mut self) {
        self.lock().remove_loading_indicator();
    }

    fn append_nav_link(&mut self, link: &PaginationLink) {
        self.lock().append_nav_link(link);
    }

    fn set_page_title(&mut self, title: &str) {
        self.lock().set_page_title(title);
    }

    fn mark_active_feed(&mut self, category: &FeedCategory) {
        self.lock().mark_active_feed(category);
    }

    fn render_error(&mut self, message: &str) {
        self.lock().render_error(message);
    }
}
