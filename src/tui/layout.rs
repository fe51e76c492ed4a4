use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use url::Url;

use crate::config::ColorConfig;
use crate::pagination::LinkRel;
use crate::render::StoryCard;
use crate::tui::app::TuiApp;
use crate::view::{PageState, ERROR_HEADLINE};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let page = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Feed tabs
            Constraint::Min(5),    // Stories
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_feed_tabs(frame, app, &page, chunks[0], colors);
    render_stories(frame, app, &page, chunks[1], colors);
    render_pagination(frame, app, &page, chunks[2]);
    render_status_bar(frame, app, chunks[3], colors);
}

fn render_feed_tabs(frame: &mut Frame, app: &TuiApp, page: &PageState, area: Rect, colors: &ColorConfig) {
    let titles: Vec<Line> = app.feeds.iter().map(|f| Line::from(f.label.clone())).collect();
    let selected = page
        .active_feed
        .as_ref()
        .and_then(|active| app.feeds.iter().position(|f| f.name == active.as_str()));

    let title = match &page.page_title {
        Some(label) => format!(" {} ", label),
        None => format!(" {} ", app.request.category),
    };

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.inactive_border)),
        )
        .highlight_style(
            Style::default()
                .fg(colors.active_border)
                .add_modifier(Modifier::BOLD),
        );
    if let Some(index) = selected {
        tabs = tabs.select(index);
    }

    frame.render_widget(tabs, area);
}

fn render_stories(frame: &mut Frame, app: &mut TuiApp, page: &PageState, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .title(format!(" Page {} ", app.request.page))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    if let Some(error) = &page.error {
        let text = Text::from(vec![
            Line::from(Span::styled(
                ERROR_HEADLINE,
                Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(error.clone(), Style::default().fg(colors.error))),
        ]);
        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    if page.loading {
        frame.render_widget(Paragraph::new("Loading stories...").block(block), area);
        return;
    }

    let first_rank = app.request.window().start + 1;
    let items: Vec<ListItem> = page
        .slots
        .iter()
        .enumerate()
        .map(|(position, slot)| match slot {
            Some(card) => ListItem::new(Text::from(card_lines(card, colors))),
            None => ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    format!("{:>3}. ...", first_rank + position),
                    Style::default().fg(colors.rank),
                )),
                Line::from(""),
            ])),
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Title line with the link's host, then the points/byline/comments line.
fn card_lines(card: &StoryCard, colors: &ColorConfig) -> Vec<Line<'static>> {
    let mut title = vec![
        Span::styled(format!("{:>3}. ", card.rank), Style::default().fg(colors.rank)),
        Span::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(host) = link_host(&card.link) {
        title.push(Span::styled(format!(" ({})", host), Style::default().fg(colors.link)));
    }

    let mut meta = vec![
        Span::styled(format!("    {}", card.points), Style::default().fg(colors.points)),
        Span::styled(format!("  {}", card.byline()), Style::default().fg(colors.byline)),
    ];
    if let Some(comments) = &card.comments {
        meta.push(Span::styled(
            format!(" | {}", comments),
            Style::default().fg(colors.byline),
        ));
    }

    vec![Line::from(title), Line::from(meta)]
}

fn link_host(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

fn render_pagination(frame: &mut Frame, app: &TuiApp, page: &PageState, area: Rect) {
    let label = |rel: LinkRel| {
        page.nav_links
            .iter()
            .find(|l| l.rel == rel)
            .map(|l| l.label.clone())
            .unwrap_or_else(|| " ".to_string())
    };

    let position = match app.total_pages {
        Some(total) => format!("Page {} of {}", app.request.page, total),
        None => format!("Page {}", app.request.page),
    };

    let line = format!("{}  {}  {}", label(LinkRel::Prev), position, label(LinkRel::Next));
    frame.render_widget(Paragraph::new(line).centered(), area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.is_loading {
        "Loading...".to_string()
    } else {
        "j/k:Nav  n/p:Page  Tab:Feed  o:Open  R:Reload  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn card(link: &str) -> StoryCard {
        StoryCard {
            position: 0,
            rank: 1,
            title: "Rust 2.0".into(),
            link: link.into(),
            points: "42 points".into(),
            author: "ferris".into(),
            age: "3 hours ago".into(),
            comments: Some("12 comments".into()),
        }
    }

    fn colors() -> ColorConfig {
        ColorConfig {
            points: Color::Magenta,
            link: Color::Green,
            ..ColorConfig::default()
        }
    }

    #[test]
    fn test_card_lines_use_points_and_link_colors() {
        let lines = card_lines(&card("https://www.rust-lang.org/blog"), &colors());

        let host = lines[0].spans.last().unwrap();
        assert_eq!(host.content, " (rust-lang.org)");
        assert_eq!(host.style.fg, Some(Color::Green));

        let points = &lines[1].spans[0];
        assert!(points.content.contains("42 points"));
        assert_eq!(points.style.fg, Some(Color::Magenta));
        assert_eq!(lines[1].spans[1].style.fg, Some(ColorConfig::default().byline));
    }

    #[test]
    fn test_link_host() {
        assert_eq!(link_host("https://example.com/a?b=1").as_deref(), Some("example.com"));
        assert_eq!(link_host("not a url"), None);
    }
}
