//! The document surface the pipeline paints into.
//!
//! - [`PageState`]: plain in-memory page
//! - [`SharedPage`]: a `PageState` behind a mutex, painted by a background load
//! - [`HtmlDocument`]: markup output

pub mod html;
pub mod state;

pub use html::HtmlDocument;
pub use state::{PageState, SharedPage};

use crate::domain::FeedCategory;
use crate::pagination::PaginationLink;
use crate::render::StoryCard;

pub const ERROR_HEADLINE: &str = "Oops! We couldn't find what you were looking for...";

pub trait ViewPort {
    /// Fix a placeholder at `position` before any data arrives.
    fn reserve_slot(&mut self, position: usize);
    fn paint_slot(&mut self, position: usize, card: &StoryCard);
    fn remove_loading_indicator(&mut self);
    fn append_nav_link(&mut self, link: &PaginationLink);
    fn set_page_title(&mut self, title: &str);
    fn mark_active_feed(&mut self, category: &FeedCategory);
    /// Replace the whole list container with one failure block.
    fn render_error(&mut self, message: &str);
}
