//! Configuration for Storyline.
//!
//! Read from `~/.config/storyline/config.toml` at startup. If the file
//! doesn't exist, a default configuration with comments is created.
//! Missing fields fall back to their defaults.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::FeedCategory;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub page: PageConfig,
    pub feeds: Vec<FeedEntry>,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Remote API location and transport settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Discussion page for stories without an external url.
    pub discussion_base: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://hacker-news.firebaseio.com/v0".to_string(),
            discussion_base: "https://news.ycombinator.com/item".to_string(),
            user_agent: concat!("storyline/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: usize,
    pub default_feed: String,
    /// Base document title; the active feed label is prefixed to it.
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: 30,
            default_feed: "topstories".to_string(),
            title: "Hacker News".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub label: String,
}

impl FeedEntry {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// Label of `category` within `feeds`, or the category name itself.
pub fn feed_label(feeds: &[FeedEntry], category: &FeedCategory) -> String {
    feeds
        .iter()
        .find(|f| f.name == category.as_str())
        .map(|f| f.label.clone())
        .unwrap_or_else(|| category.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            page: PageConfig::default(),
            feeds: vec![
                FeedEntry::new("topstories", "Top"),
                FeedEntry::new("newstories", "New"),
                FeedEntry::new("beststories", "Best"),
                FeedEntry::new("askstories", "Ask"),
                FeedEntry::new("showstories", "Show"),
                FeedEntry::new("jobstories", "Jobs"),
            ],
            colors: ColorConfig::default(),
            keybindings: KeybindingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating a commented
    /// default file if none exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/storyline/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("storyline").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.size == 0 {
            return Err(ConfigError::Invalid("page.size must be at least 1".into()));
        }
        self.default_category()?;
        Ok(())
    }

    pub fn default_category(&self) -> Result<FeedCategory, ConfigError> {
        FeedCategory::parse(&self.page.default_feed).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "page.default_feed is not a valid feed name: {:?}",
                self.page.default_feed
            ))
        })
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_config_content() -> String {
        r##"# Storyline Configuration

[api]
# Base URL of the story API. Lists live at {endpoint}/{feed}.json and
# records at {endpoint}/item/{id}.json
endpoint = "https://hacker-news.firebaseio.com/v0"

# Where stories without an external link point to
discussion_base = "https://news.ycombinator.com/item"

# Transport timeout in seconds
timeout_secs = 10

[page]
# Stories per page
size = 30

# Feed used when the query has no (valid) type parameter
default_feed = "topstories"

# Base document title
title = "Hacker News"

# Feed menu: name is the remote list, label is shown in titles and menus
[[feeds]]
name = "topstories"
label = "Top"

[[feeds]]
name = "newstories"
label = "New"

[[feeds]]
name = "beststories"
label = "Best"

[[feeds]]
name = "askstories"
label = "Ask"

[[feeds]]
name = "showstories"
label = "Show"

[[feeds]]
name = "jobstories"
label = "Jobs"

# Colors: named (Cyan, DarkGray, LightRed, ...) or hex ("#RRGGBB", "#RGB")
[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
rank = "DarkGray"
points = "Yellow"
byline = "Gray"
link = "Blue"
error = "LightRed"
status_fg = "White"
status_bg = "DarkGray"

# Keys: single characters, special keys (Enter, Tab, BackTab, PageUp, ...)
# and modifiers ("Ctrl+c", "Shift+Tab")
[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "Right", "PageDown"]
prev_page = ["p", "Left", "PageUp"]
next_feed = ["Tab"]
prev_feed = ["BackTab", "Shift+Tab"]
open_in_browser = ["o", "Enter"]
reload = ["R"]
"##
        .to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.page.size, 30);
        assert_eq!(config.feeds, Config::default().feeds);
        assert_eq!(config.colors.active_border, ratatui::style::Color::Cyan);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[page]
size = 10

[[feeds]]
name = "askstories"
label = "Ask HN"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.page.size, 10);
        assert_eq!(config.page.default_feed, "topstories");
        assert_eq!(config.feeds.len(), 1);
        assert_eq!(config.api.endpoint, "https://hacker-news.firebaseio.com/v0");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.page.size, 30);
        assert_eq!(config.feeds.len(), 6);
    }

    #[test]
    fn test_feed_label() {
        let config = Config::default();
        let known = FeedCategory::parse("showstories").unwrap();
        let unknown = FeedCategory::parse("pollstories").unwrap();
        assert_eq!(feed_label(&config.feeds, &known), "Show");
        assert_eq!(feed_label(&config.feeds, &unknown), "pollstories");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[page]\ndefault_feed = \"beststories\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_category().unwrap().as_str(), "beststories");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[page]\nsize = 0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        fs::write(&path, "[page]\ndefault_feed = \"top stories\"\n").unwrap();
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        fs::write(&path, "[page\n").unwrap();
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
