pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::form_urlencoded;

use crate::query::{PAGE_KEY, TYPE_KEY};

#[derive(Parser)]
#[command(name = "storyline")]
#[command(about = "A paginated Hacker News story reader", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/.config/storyline/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Feed and page selection shared by the page-rendering commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Navigation query string, e.g. "?type=newstories&page=2"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Feed category (overrides the query's type)
    #[arg(short = 't', long = "type")]
    pub feed: Option<String>,

    /// 1-based page number (overrides the query's page)
    #[arg(short, long)]
    pub page: Option<u32>,
}

impl PageArgs {
    /// Fold the explicit flags into the query string.
    pub fn to_query(&self) -> String {
        let base = self.query.as_deref().unwrap_or("").trim();
        let base = base.strip_prefix('?').unwrap_or(base);

        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
        for (key, value) in form_urlencoded::parse(base.as_bytes()) {
            let overridden = (key == TYPE_KEY && self.feed.is_some())
                || (key == PAGE_KEY && self.page.is_some());
            if !overridden {
                serializer.append_pair(&key, &value);
            }
        }
        if let Some(feed) = &self.feed {
            serializer.append_pair(TYPE_KEY, feed);
        }
        if let Some(page) = self.page {
            serializer.append_pair(PAGE_KEY, &page.to_string());
        }
        serializer.finish()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one page as an HTML document
    Page {
        #[command(flatten)]
        args: PageArgs,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse pages interactively
    Tui {
        #[command(flatten)]
        args: PageArgs,

        /// Log file path (logs are discarded otherwise)
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
    /// List the configured feed categories
    Feeds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_to_query_passthrough() {
        let args = PageArgs {
            query: Some("?type=newstories&page=2".into()),
            ..Default::default()
        };
        assert_eq!(args.to_query(), "?type=newstories&page=2");
    }

    #[test]
    fn test_to_query_flags_override() {
        let args = PageArgs {
            query: Some("type=newstories&page=2".into()),
            feed: Some("askstories".into()),
            page: Some(4),
        };
        assert_eq!(args.to_query(), "?type=askstories&page=4");
    }

    #[test]
    fn test_to_query_single_flag() {
        let args = PageArgs {
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(args.to_query(), "?page=2");
    }

    #[test]
    fn test_to_query_empty() {
        assert_eq!(PageArgs::default().to_query(), "?");
    }

    #[test]
    fn test_parse_page_command() {
        let cli = Cli::try_parse_from(["storyline", "page", "--type", "beststories", "-p", "3"]).unwrap();
        match cli.command {
            Commands::Page { args, output } => {
                assert_eq!(args.to_query(), "?type=beststories&page=3");
                assert!(output.is_none());
            }
            _ => panic!("expected page command"),
        }
    }
}
