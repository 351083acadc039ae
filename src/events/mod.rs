//! Event handling layer for the newsatlas TUI.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`]. Network work
//! is never performed here: fetches are dispatched to the workers through the
//! request channels, and their outcomes arrive later on the event loop.
//!
//! Global keys:
//!
//! - `Tab` switches between the news and countries views
//! - `Ctrl+C` quits; `Esc` quits from an empty input in list mode
//!
//! View-specific keys live in [`countries`] and [`news`]; mouse handling in [`mouse`].
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, View};
use crate::store::Dispatched;

mod countries;
mod mouse;
mod news;

/// Request channels the event layer may dispatch to.
#[derive(Clone, Copy)]
pub struct Requests<'a> {
    /// News worker requests.
    pub news: &'a mpsc::UnboundedSender<Dispatched>,
    /// Country worker requests.
    pub countries: &'a mpsc::UnboundedSender<()>,
}

/// What: Handle one terminal event.
///
/// Inputs:
/// - `ev`: Raw crossterm event.
/// - `app`: Application state to mutate.
/// - `req`: Worker request channels.
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
pub fn handle_event(ev: CEvent, app: &mut AppState, req: Requests<'_>) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, app, req),
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(me, app);
            false
        }
        CEvent::Paste(text) => {
            paste_into_input(app, &text);
            false
        }
        _ => false,
    }
}

/// Global keys first, then the active view's handler.
fn handle_key(ke: KeyEvent, app: &mut AppState, req: Requests<'_>) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if ke.code == KeyCode::Tab {
        app.view = app.view.toggled();
        tracing::debug!(view = ?app.view, "view switched");
        return false;
    }
    match app.view {
        View::Countries => countries::handle_countries_key(ke, &mut app.countries, req),
        View::News => news::handle_news_key(ke, &mut app.news, req),
    }
}

/// Bracketed paste goes into whichever input is active; newlines are dropped.
fn paste_into_input(app: &mut AppState, text: &str) {
    let clean: String = text.chars().filter(|c| !c.is_control()).collect();
    match app.view {
        View::Countries if !app.countries.in_detail_mode() => {
            app.countries.search_term.push_str(&clean);
            crate::logic::apply_country_filter_preserve_selection(&mut app.countries);
        }
        View::News => app.news.input.push_str(&clean),
        View::Countries => {}
    }
}
