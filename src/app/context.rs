use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::page::PageLoader;

pub struct AppContext {
    pub config: Arc<Config>,
    pub loader: Arc<PageLoader>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let loader = Arc::new(PageLoader::new(&config, fetcher)?);

        Ok(Self {
            config: Arc::new(config),
            loader,
        })
    }
}
