pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::task::JoinHandle;

use crate::app::{AppContext, Result};
use crate::domain::PageRequest;
use crate::page::PageOutcome;
use crate::pagination::{page_query, LinkRel};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>, query: &str) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, query).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Launch a load for `request` painting into a fresh page.
fn start_load(app: &mut TuiApp, ctx: &AppContext, request: PageRequest) -> JoinHandle<PageOutcome> {
    let mut view = app.begin_load(request.clone());
    let loader = ctx.loader.clone();
    tokio::spawn(async move { loader.load_request(request, &mut view).await })
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, query: &str) -> Result<()> {
    let config = ctx.config.clone();
    let initial = ctx.loader.request_for(query);
    let mut tui_app = TuiApp::new(config.feeds.clone(), initial.clone());
    let mut events = EventHandler::new(Duration::from_millis(100));

    let mut loading = Some(start_load(&mut tui_app, &ctx, initial));

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        match events.next().await? {
            AppEvent::Key(key) => {
                tui_app.clear_status();

                // Links are followed through their query string, so
                // navigation parses exactly like a fresh load.
                let target = match config.keybindings.get_action(&key) {
                    Action::Quit => {
                        tui_app.should_quit = true;
                        None
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                        None
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                        None
                    }
                    Action::NextPage => tui_app.nav_link(LinkRel::Next).map(|l| l.href),
                    Action::PrevPage => tui_app.nav_link(LinkRel::Prev).map(|l| l.href),
                    Action::NextFeed => tui_app.feed_query(1),
                    Action::PrevFeed => tui_app.feed_query(-1),
                    Action::OpenInBrowser => {
                        if let Some(card) = tui_app.selected_card() {
                            if let Err(e) = open::that(&card.link) {
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            }
                        }
                        None
                    }
                    Action::Reload => Some(page_query(&tui_app.request, tui_app.request.page)),
                    Action::None => None,
                };

                if let Some(query) = target {
                    let request = ctx.loader.request_for(&query);
                    loading = Some(start_load(&mut tui_app, &ctx, request));
                }
            }
            AppEvent::Tick => {}
        }

        if loading.as_ref().is_some_and(|handle| handle.is_finished()) {
            if let Some(handle) = loading.take() {
                match handle.await {
                    Ok(outcome) => finish_load(&mut tui_app, &outcome),
                    Err(e) => {
                        tracing::error!("Page load task failed: {}", e);
                        tui_app.is_loading = false;
                        tui_app.set_status(format!("Load failed: {}", e));
                    }
                }
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn finish_load(tui_app: &mut TuiApp, outcome: &PageOutcome) {
    tui_app.is_loading = false;
    match outcome {
        PageOutcome::Rendered {
            summary,
            total_pages,
            ..
        } => {
            tui_app.total_pages = Some(*total_pages);
            if summary.failed > 0 {
                tui_app.set_status(format!("{} stories could not be loaded", summary.failed));
            }
        }
        PageOutcome::Failed { .. } => {}
    }
}
