//! Scripted fetcher for pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::fetcher::{Fetcher, NetworkError};

pub const ENDPOINT: &str = "https://api.test/v0";

/// Fixed creation time for generated items.
pub const ITEM_TIME: i64 = 1_700_000_000;

#[derive(Debug, Clone)]
enum Canned {
    Json(Value),
    Status(u16),
}

/// Maps URLs to canned responses. Unknown URLs answer 404.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, Canned>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url: &str, value: Value) -> Self {
        self.insert(url, Canned::Json(value));
        self
    }

    pub fn with_status(self, url: &str, code: u16) -> Self {
        self.insert(url, Canned::Status(code));
        self
    }

    pub fn with_list(self, category: &str, ids: &[u64]) -> Self {
        let url = format!("{}/{}.json", ENDPOINT, category);
        self.with_json(&url, json!(ids))
    }

    pub fn insert_item(&self, id: u64) {
        self.insert(&item_url(id), Canned::Json(item_json(id)));
    }

    /// Hold the response for `url` until the returned sender fires.
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn insert(&self, url: &str, canned: Canned) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), canned);
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, NetworkError> {
        self.calls.lock().unwrap().push(url.to_string());

        let gate = self.gates.lock().unwrap().remove(url);
        if let Some(gate) = gate {
            gate.await
                .map_err(|_| NetworkError::Transport("gate dropped".into()))?;
        }

        let canned = self.responses.lock().unwrap().get(url).cloned();
        match canned {
            Some(Canned::Json(value)) => Ok(value),
            Some(Canned::Status(code)) => Err(status_error(code)),
            None => Err(status_error(404)),
        }
    }
}

pub fn item_url(id: u64) -> String {
    format!("{}/item/{}.json", ENDPOINT, id)
}

pub fn item_json(id: u64) -> Value {
    json!({
        "id": id,
        "by": format!("user{}", id),
        "score": id,
        "time": ITEM_TIME,
        "title": format!("Story {}", id),
        "type": "story",
        "url": format!("https://stories.test/{}", id),
        "descendants": id * 2,
    })
}

fn status_error(code: u16) -> NetworkError {
    let text = StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
        .to_string();
    NetworkError::Status { code, text }
}
