use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{format_area, format_thousands};
use super::rect_tuple;
use crate::config::theme;
use crate::state::{AppState, Country, FetchState};

/// What: Render the countries view: search box plus list, or the detail card.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; the list area is recorded for mouse clicks.
/// - `area`: Area assigned to the view.
pub(super) fn render_countries(f: &mut Frame, app: &mut AppState, area: Rect) {
    if let Some(country) = app.countries.detail.as_ref() {
        render_detail(f, country, area);
        app.countries.list_rect = None;
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    render_search(f, app, chunks[0]);
    render_list(f, app, chunks[1]);
}

/// What: Draw the search input and place the terminal cursor at its end.
fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let term = app.countries.search_term.as_str();
    let block = Block::default()
        .title(Span::styled(" Search countries ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.sapphire));
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(Span::styled(term, Style::default().fg(th.text))).block(block),
        area,
    );
    let width = u16::try_from(term.width()).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(width)
        .min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(x, inner.y));
}

/// What: Build the single-line card for one country.
fn country_line(c: &Country) -> Line<'static> {
    let th = theme();
    let mut place = c.region.clone();
    if !c.subregion.is_empty() {
        place = format!("{place} / {}", c.subregion);
    }
    Line::from(vec![
        Span::styled(
            c.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  pop ", Style::default().fg(th.overlay1)),
        Span::styled(format_thousands(c.population), Style::default().fg(th.green)),
        Span::styled("  area ", Style::default().fg(th.overlay1)),
        Span::styled(
            format!("{} km²", format_area(c.area)),
            Style::default().fg(th.yellow),
        ),
        Span::styled(format!("  {place}"), Style::default().fg(th.subtext0)),
    ])
}

/// What: Draw the filtered list, or the loading/failed placeholder.
///
/// Details:
/// - Records the inner list area on `app.countries.list_rect`.
fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let view = &mut app.countries;
    let title = match &view.all {
        FetchState::Succeeded(all) => {
            format!(" Countries ({}/{}) ", view.filtered.len(), all.len())
        }
        _ => " Countries ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    view.list_rect = Some(rect_tuple(inner));

    let placeholder = match &view.all {
        FetchState::Idle | FetchState::Loading => Some(Span::styled(
            "Loading countries…",
            Style::default().fg(th.yellow),
        )),
        FetchState::Failed(err) => Some(Span::styled(
            format!("{err} (F5 to retry)"),
            Style::default().fg(th.red),
        )),
        FetchState::Succeeded(_) if view.filtered.is_empty() => Some(Span::styled(
            "No matching countries",
            Style::default().fg(th.subtext0),
        )),
        FetchState::Succeeded(_) => None,
    };
    if let Some(msg) = placeholder {
        f.render_widget(
            Paragraph::new(msg).block(block).wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view
        .filtered
        .iter()
        .map(|c| ListItem::new(country_line(c)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(th.text).bg(th.surface2))
        .highlight_symbol("> ");
    view.list_state.select(Some(view.selected));
    f.render_stateful_widget(list, area, &mut view.list_state);
}

/// What: Draw the detail card for one country with a back hint.
fn render_detail(f: &mut Frame, c: &Country, area: Rect) {
    let th = theme();
    let label = |k: &'static str| Span::styled(format!("{k:<12}"), Style::default().fg(th.sapphire));
    let value = |v: String| Span::styled(v, Style::default().fg(th.text));
    let mut lines = vec![
        Line::from(Span::styled(
            c.name.clone(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![label("Population"), value(format_thousands(c.population))]),
        Line::from(vec![label("Area"), value(format!("{} km²", format_area(c.area)))]),
        Line::from(vec![label("Region"), value(c.region.clone())]),
    ];
    if !c.subregion.is_empty() {
        lines.push(Line::from(vec![label("Subregion"), value(c.subregion.clone())]));
    }
    if !c.flags.png.is_empty() {
        lines.push(Line::from(vec![label("Flag (png)"), value(c.flags.png.clone())]));
    }
    if !c.flags.svg.is_empty() {
        lines.push(Line::from(vec![label("Flag (svg)"), value(c.flags.svg.clone())]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Back (Esc)",
        Style::default().fg(th.overlay1),
    )));

    let block = Block::default()
        .title(Span::styled(" Country ", Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
