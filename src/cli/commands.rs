use std::fs;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::page::PageOutcome;
use crate::view::HtmlDocument;

/// Render the page selected by `query` and write the HTML document to
/// `output`, or stdout.
pub async fn render_page(ctx: &AppContext, query: &str, output: Option<&Path>) -> Result<PageOutcome> {
    let mut document = HtmlDocument::new(ctx.config.page.title.as_str(), ctx.config.feeds.clone());
    let outcome = ctx.loader.load(query, &mut document).await;

    match &outcome {
        PageOutcome::Rendered {
            request,
            summary,
            total_pages,
            ..
        } => {
            if summary.failed > 0 {
                eprintln!("{} stories could not be loaded", summary.failed);
            }
            tracing::debug!("Page {} of {}", request.page, total_pages);
        }
        PageOutcome::Failed { error, .. } => {
            eprintln!("Failed to load stories: {}", error);
        }
    }

    let html = document.render();
    match output {
        Some(path) => {
            fs::write(path, html)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(outcome)
}

pub fn list_feeds(ctx: &AppContext) -> Result<()> {
    if ctx.config.feeds.is_empty() {
        println!("No feeds configured");
        return Ok(());
    }

    for feed in &ctx.config.feeds {
        let marker = if feed.name == ctx.config.page.default_feed {
            "*"
        } else {
            " "
        };
        println!("{} {:<14} {}", marker, feed.name, feed.label);
    }

    Ok(())
}
