use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum StorylineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, StorylineError>;
