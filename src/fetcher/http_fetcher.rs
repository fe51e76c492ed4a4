use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::app::Result;
use crate::config::ApiConfig;
use crate::fetcher::{Fetcher, NetworkError};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<Value, NetworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("GET {} returned {}", url, status);
            return Err(NetworkError::Status {
                code: status.as_u16(),
                text: status
                    .canonical_reason()
                    .unwrap_or_else(|| status.as_str())
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| NetworkError::Decode(e.to_string()))
    }
}
