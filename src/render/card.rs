use chrono::{DateTime, Utc};

use crate::domain::Item;
use crate::render::timeago;

/// Display fields for one painted slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryCard {
    /// 0-based slot within the page.
    pub position: usize,
    /// 1-based rank across the whole list.
    pub rank: usize,
    pub title: String,
    pub link: String,
    pub points: String,
    pub author: String,
    pub age: String,
    pub comments: Option<String>,
}

impl StoryCard {
    pub fn new(
        item: &Item,
        position: usize,
        window_start: usize,
        discussion_base: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let link = item
            .url
            .clone()
            .unwrap_or_else(|| format!("{}?id={}", discussion_base, item.id));

        Self {
            position,
            rank: window_start + position + 1,
            title: item.title.clone(),
            link,
            points: count_label(item.score, "point", "points"),
            author: item.author.clone(),
            age: timeago::from_now(item.created_at(), now),
            comments: item
                .descendants
                .filter(|n| *n > 0)
                .map(|n| count_label(n, "comment", "comments")),
        }
    }

    /// `by {author}, {age}`
    pub fn byline(&self) -> String {
        format!("by {}, {}", self.author, self.age)
    }
}

fn count_label(n: u32, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}
