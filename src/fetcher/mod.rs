pub mod http_fetcher;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use http_fetcher::HttpFetcher;

/// A failed read of a remote resource. Display is the raw status or
/// transport text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Any response other than 200.
    #[error("{text}")]
    Status { code: u16, text: String },

    #[error("{0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait Fetcher {
    /// Read `url` once and parse the body as JSON.
    async fn fetch(&self, url: &str) -> Result<Value, NetworkError>;
}

/// Convert fetched JSON into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, NetworkError> {
    serde_json::from_value(value).map_err(|e| NetworkError::Decode(e.to_string()))
}
