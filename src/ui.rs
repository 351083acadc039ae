//! Rendering for the newsatlas TUI.
//!
//! Every frame is a pure projection of [`AppState`]. The only writes back into
//! state are the list areas recorded for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::config::theme;
use crate::state::{AppState, View};

mod countries;
pub mod helpers;
mod news;

/// Lines occupied by one country row.
pub const COUNTRY_ROW_HEIGHT: u16 = 1;
/// Lines occupied by one article row (title + source/teaser).
pub const ARTICLE_ROW_HEIGHT: u16 = 2;

/// What: Convert a ratatui `Rect` into the tuple stored for hit-testing.
const fn rect_tuple(r: Rect) -> (u16, u16, u16, u16) {
    (r.x, r.y, r.width, r.height)
}

/// What: Render the whole frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; list areas are recorded for mouse handling.
///
/// Details:
/// - Layout: one-line view tabs, the active view, one-line key hints.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(th.crust)
                    .bg(th.mauve)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(th.overlay1))
        }
    };
    let header = Line::from(vec![
        Span::styled(" newsatlas ", Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)),
        tab("News", app.view == View::News),
        Span::raw(" "),
        tab("Countries", app.view == View::Countries),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let hints = match app.view {
        View::News => "Enter search/headlines · ↑↓ move · Ctrl+L clear error · Tab countries · Esc quit",
        View::Countries if app.countries.in_detail_mode() => "Esc/Backspace back to list · Tab news",
        View::Countries => "type to filter · ↑↓ move · Enter details · F5 reload · Tab news · Esc quit",
    };
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(th.overlay1))),
        chunks[2],
    );

    match app.view {
        View::News => news::render_news(f, app, chunks[1]),
        View::Countries => countries::render_countries(f, app, chunks[1]),
    }
}
