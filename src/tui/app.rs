use ratatui::widgets::ListState;

use crate::config::FeedEntry;
use crate::domain::PageRequest;
use crate::pagination::{LinkRel, PaginationLink};
use crate::render::StoryCard;
use crate::view::{PageState, SharedPage};

pub struct TuiApp {
    pub feeds: Vec<FeedEntry>,
    pub request: PageRequest,
    /// The page being painted by the current load.
    pub page: SharedPage,
    pub total_pages: Option<usize>,
    pub selected: usize,
    pub list_state: ListState,
    pub should_quit: bool,
    pub is_loading: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new(feeds: Vec<FeedEntry>, request: PageRequest) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            feeds,
            request,
            page: SharedPage::new(),
            total_pages: None,
            selected: 0,
            list_state,
            should_quit: false,
            is_loading: false,
            status_message: None,
        }
    }

    /// Start over with a fresh page for `request`; returns the view the
    /// loader should paint into.
    pub fn begin_load(&mut self, request: PageRequest) -> SharedPage {
        self.request = request;
        self.page = SharedPage::new();
        self.total_pages = None;
        self.selected = 0;
        self.list_state.select(Some(0));
        self.is_loading = true;
        self.page.clone()
    }

    pub fn snapshot(&self) -> PageState {
        self.page.snapshot()
    }

    pub fn feed_index(&self) -> Option<usize> {
        self.feeds
            .iter()
            .position(|f| f.name == self.request.category.as_str())
    }

    /// Query for the feed `offset` steps away in the menu, wrapping around.
    pub fn feed_query(&self, offset: isize) -> Option<String> {
        if self.feeds.is_empty() {
            return None;
        }
        let len = self.feeds.len() as isize;
        let next = match self.feed_index() {
            Some(i) => (i as isize + offset).rem_euclid(len),
            None if offset >= 0 => 0,
            None => len - 1,
        };
        Some(format!("?type={}", self.feeds[next as usize].name))
    }

    pub fn nav_link(&self, rel: LinkRel) -> Option<PaginationLink> {
        self.page
            .lock()
            .nav_links
            .iter()
            .find(|l| l.rel == rel)
            .cloned()
    }

    pub fn selected_card(&self) -> Option<StoryCard> {
        self.page
            .lock()
            .slots
            .get(self.selected)
            .cloned()
            .flatten()
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn move_down(&mut self) {
        let slots = self.page.lock().slots.len();
        if self.selected + 1 < slots {
            self.selected += 1;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
