use std::fs::File;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storyline::app::AppContext;
use storyline::cli::{commands, Cli, Commands};
use storyline::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs go to a file or nowhere.
    match &cli.command {
        Commands::Tui { log: Some(path), .. } => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(EnvFilter::from_default_env())
                .init();
        }
        Commands::Tui { log: None, .. } => {}
        _ => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Page { args, output } => {
            commands::render_page(&ctx, &args.to_query(), output.as_deref()).await?;
        }
        Commands::Tui { args, .. } => {
            storyline::tui::run(Arc::new(ctx), &args.to_query()).await?;
        }
        Commands::Feeds => {
            commands::list_feeds(&ctx)?;
        }
    }

    Ok(())
}
