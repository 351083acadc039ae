use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::rect_tuple;
use crate::config::theme;
use crate::state::{AppState, Article};

/// What: Render the news view: input, status line, and article list.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; the list area is recorded for mouse clicks.
/// - `area`: Area assigned to the view.
///
/// Details:
/// - The status line shows `Loading…` while a request is pending and the
///   store's error message (red) otherwise, if any.
pub(super) fn render_news(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let news = &mut app.news;

    let input_block = Block::default()
        .title(Span::styled(
            " Search news (empty = top headlines) ",
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.sapphire));
    let input_inner = input_block.inner(chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(news.input.as_str(), Style::default().fg(th.text)))
            .block(input_block),
        chunks[0],
    );
    let width = u16::try_from(news.input.width()).unwrap_or(u16::MAX);
    let x = input_inner
        .x
        .saturating_add(width)
        .min(input_inner.x + input_inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(x, input_inner.y));

    let state = news.store.state();
    let status = if state.loading {
        Span::styled(" Loading…", Style::default().fg(th.yellow))
    } else if !state.error.is_empty() {
        Span::styled(format!(" {}", state.error), Style::default().fg(th.red))
    } else {
        Span::styled(
            format!(" {} articles", state.articles.len()),
            Style::default().fg(th.subtext0),
        )
    };
    f.render_widget(Paragraph::new(status), chunks[1]);

    let list_area = chunks[2];
    let block = Block::default()
        .title(Span::styled(" Articles ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(list_area);
    news.list_rect = Some(rect_tuple(inner));

    // Two columns reserved for the highlight symbol.
    let text_width = usize::from(inner.width.saturating_sub(2));
    let items: Vec<ListItem> = state
        .articles
        .iter()
        .map(|a| ListItem::new(article_lines(a, text_width)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(th.surface2))
        .highlight_symbol("> ");
    if state.articles.is_empty() {
        news.list_state.select(None);
    } else {
        news.list_state
            .select(Some(news.selected.min(state.articles.len() - 1)));
    }
    f.render_stateful_widget(list, list_area, &mut news.list_state);
}

/// What: Build the two-line entry for one article.
///
/// Inputs:
/// - `a`: Article to show.
/// - `width`: Available text width.
///
/// Output:
/// - Title on the first line; source and teaser on the second.
fn article_lines(a: &Article, width: usize) -> Vec<Line<'static>> {
    let th = theme();
    let title = truncate_to_width(&a.title, width);
    let source = if a.source_name.is_empty() {
        String::new()
    } else {
        format!("{} · ", a.source_name)
    };
    let teaser = a.description.as_deref().unwrap_or("");
    let rest = width.saturating_sub(source.width());
    vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(source, Style::default().fg(th.sapphire)),
            Span::styled(
                truncate_to_width(teaser, rest),
                Style::default().fg(th.overlay2),
            ),
        ]),
    ]
}
