//! Navigation query parsing.
//!
//! Reads the `type` and `page` keys from a query string such as
//! `?type=newstories&page=2`. Missing or malformed values fall back to
//! defaults; parsing never fails.

use url::form_urlencoded;

use crate::domain::FeedCategory;

pub const TYPE_KEY: &str = "type";
pub const PAGE_KEY: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavQuery {
    pub category: FeedCategory,
    /// 1-based, always >= 1.
    pub page: u32,
    pub category_in_query: bool,
}

#[derive(Debug, Clone)]
pub struct QueryParser {
    default_category: FeedCategory,
}

impl QueryParser {
    pub fn new(default_category: FeedCategory) -> Self {
        Self { default_category }
    }

    pub fn parse(&self, query: &str) -> NavQuery {
        let query = query.trim().trim_start_matches('?');

        let mut type_value = None;
        let mut page_value = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                TYPE_KEY if type_value.is_none() => type_value = Some(value.into_owned()),
                PAGE_KEY if page_value.is_none() => page_value = Some(value.into_owned()),
                _ => {}
            }
        }

        let category_in_query = type_value.is_some();
        let category = type_value
            .as_deref()
            .and_then(FeedCategory::parse)
            .unwrap_or_else(|| self.default_category.clone());

        let page = page_value
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        NavQuery {
            category,
            page,
            category_in_query,
        }
    }
}
