//! # Storyline
//!
//! A paginated reader for the Hacker News story API.
//!
//! ## Architecture
//!
//! Each page load runs one pipeline:
//!
//! ```text
//! QueryParser → PageWindow → ListResolver (drives Fetcher) → Renderer (drives Paginator)
//!                                        └─ on failure ─→ ErrorView
//! ```
//!
//! The pipeline paints into a [`ViewPort`](view::ViewPort), so the same load
//! can produce an HTML document or drive the terminal UI.
//!
//! ## Quick Start
//!
//! ```bash
//! # Render the second page of new stories as HTML
//! storyline page --query "?type=newstories&page=2" -o new.html
//!
//! # Browse interactively
//! storyline tui --type beststories
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher and page loader.
pub mod app;

/// Command-line interface using clap.
///
/// - `page` - Render one page as HTML
/// - `tui` - Browse pages interactively
/// - `feeds` - List configured feeds
pub mod cli;

/// Configuration loaded from `~/.config/storyline/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedCategory`](domain::FeedCategory): remote list name
/// - [`Item`](domain::Item): story record
/// - [`PageRequest`](domain::PageRequest) / [`PageResult`](domain::PageResult): one page load
pub mod domain;

/// Single-read HTTP fetching of JSON resources.
pub mod fetcher;

/// The load pipeline tying every stage together.
pub mod page;

/// Page windows and prev/next link generation.
pub mod pagination;

/// Navigation query parsing.
pub mod query;

/// Order-preserving incremental rendering and the error view.
pub mod render;

/// Id-list fetch, windowing and concurrent item resolution.
pub mod resolver;

/// Terminal user interface built with ratatui.
pub mod tui;

/// Document surfaces the pipeline paints into.
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;
