//! HTML document view.
//!
//! Keeps the painted page in a [`PageState`] and serialises it on demand:
//! `#stories__container` holds one `article.list-group-item` per slot,
//! `#navigation__container` holds the pagination entries and `#page-title`
//! carries the active feed label.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::FeedEntry;
use crate::domain::FeedCategory;
use crate::pagination::PaginationLink;
use crate::render::StoryCard;
use crate::view::{PageState, ViewPort, ERROR_HEADLINE};

pub struct HtmlDocument {
    base_title: String,
    feeds: Vec<FeedEntry>,
    page: PageState,
}

impl HtmlDocument {
    pub fn new(base_title: impl Into<String>, feeds: Vec<FeedEntry>) -> Self {
        Self {
            base_title: base_title.into(),
            feeds,
            page: PageState::new(),
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// `{label} | {base title}` once a page title is set.
    pub fn document_title(&self) -> String {
        match &self.page.page_title {
            Some(title) => format!("{} | {}", title, self.base_title),
            None => self.base_title.clone(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", text(&self.document_title())));
        out.push_str("</head>\n<body>\n");

        out.push_str(&self.render_feed_menu());

        out.push_str("<main class=\"container\">\n");
        out.push_str(&format!(
            "<h1 id=\"page-title\">{}</h1>\n",
            text(self.page.page_title.as_deref().unwrap_or(&self.base_title))
        ));

        out.push_str("<div id=\"stories__container\" class=\"list-group\">\n");
        out.push_str(&self.render_container());
        out.push_str("</div>\n");

        out.push_str("<ul id=\"navigation__container\" class=\"pagination\">\n");
        for link in &self.page.nav_links {
            out.push_str(&render_nav_link(link));
        }
        out.push_str("</ul>\n");

        out.push_str("</main>\n</body>\n</html>\n");
        out
    }

    fn render_feed_menu(&self) -> String {
        let mut out = String::from("<nav><ul class=\"nav\">\n");
        for feed in &self.feeds {
            let active = self
                .page
                .active_feed
                .as_ref()
                .is_some_and(|c| c.as_str() == feed.name);
            out.push_str(&format!(
                "<li class=\"nav-item\"><a class=\"nav-link{}\" data-type=\"{}\" href=\"?type={}\">{}</a></li>\n",
                if active { " active" } else { "" },
                attr(&feed.name),
                attr(&feed.name),
                text(&feed.label)
            ));
        }
        out.push_str("</ul></nav>\n");
        out
    }

    fn render_container(&self) -> String {
        if let Some(error) = &self.page.error {
            return format!(
                "<div class=\"alert alert-danger\" role=\"alert\">{}<hr>{}</div>\n",
                text(ERROR_HEADLINE),
                text(error)
            );
        }

        let mut out = String::new();
        if self.page.loading {
            out.push_str("<div class=\"stories__loader\">Loading&hellip;</div>\n");
        }
        for slot in &self.page.slots {
            match slot {
                Some(card) => out.push_str(&render_article(card)),
                None => out.push_str("<article class=\"list-group-item\"></article>\n"),
            }
        }
        out
    }
}

fn render_article(card: &StoryCard) -> String {
    let comments = card
        .comments
        .as_ref()
        .map(|c| format!(" | {}", text(c)))
        .unwrap_or_default();

    format!(
        "<article class=\"list-group-item\"><a href=\"{link}\" target=\"_blank\" \
         class=\"list-group-item-action flex-column align-items-start\">\
         <header class=\"d-flex w-100 justify-content-md-between flex-column flex-md-row\">\
         <small class=\"order-md-2 align-self-end\">{points}</small>\
         <h2 class=\"mb-1 h5\"><small>{rank}.</small> {title}</h2></header>\
         <footer><small>{byline}{comments}</small></footer></a></article>\n",
        link = attr(&card.link),
        points = text(&card.points),
        rank = card.rank,
        title = text(&card.title),
        byline = text(&card.byline()),
        comments = comments,
    )
}

fn render_nav_link(link: &PaginationLink) -> String {
    format!(
        "<li class=\"page-item{}\"><a class=\"page-link\" href=\"{}\">{}</a></li>\n",
        if link.is_current { " active" } else { "" },
        attr(&link.href),
        text(&link.label)
    )
}

impl ViewPort for HtmlDocument {
    fn reserve_slot(&mut self, position: usize) {
        self.page.reserve_slot(position);
    }

    fn paint_slot(&mut self, position: usize, card: &StoryCard) {
        self.page.paint_slot(position, card);
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
