use url::form_urlencoded;

use crate::domain::PageRequest;
use crate::query::{PAGE_KEY, TYPE_KEY};

pub const PREV_LABEL: &str = "\u{ab}";
pub const NEXT_LABEL: &str = "\u{bb}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRel {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationLink {
    pub rel: LinkRel,
    pub target_page: u32,
    pub label: String,
    /// Query string for the target page, e.g. `?type=newstories&page=2`.
    pub href: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Previous/next links relative to the requested page.
    pub fn links(&self, request: &PageRequest, total: usize) -> Vec<PaginationLink> {
        let current = request.page;
        let pages = self.total_pages(total);
        let mut links = Vec::with_capacity(2);

        if current > 1 {
            links.push(Self::link(request, LinkRel::Prev, current - 1, PREV_LABEL));
        }
        if (current as usize) < pages {
            links.push(Self::link(request, LinkRel::Next, current + 1, NEXT_LABEL));
        }

        links
    }

    fn link(request: &PageRequest, rel: LinkRel, target: u32, label: &str) -> PaginationLink {
        PaginationLink {
            rel,
            target_page: target,
            label: label.to_string(),
            href: page_query(request, target),
            is_current: target == request.page,
        }
    }
}

/// Build the query string that navigates to `page`.
pub fn page_query(request: &PageRequest, page: u32) -> String {
    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    if request.category_in_query {
        serializer.append_pair(TYPE_KEY, request.category.as_str());
    }
    serializer.append_pair(PAGE_KEY, &page.to_string());
    serializer.finish()
}
