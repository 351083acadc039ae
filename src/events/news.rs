//! Key handling for the news view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Requests;
use crate::logic::{dispatch_news, move_sel, submit_news_input};
use crate::state::NewsView;
use crate::store::NewsAction;

/// Cursor movement over the store's articles.
pub(super) fn move_article_sel(news: &mut NewsView, delta: isize) {
    let len = news.store.state().articles.len();
    move_sel(&mut news.selected, &mut news.list_state, len, delta);
}

/// What: Handle a key press while the news view is active.
///
/// Inputs:
/// - `ke`: Key event (press only).
/// - `news`: News view state.
/// - `req`: Worker request channels.
///
/// Output:
/// - `true` to exit the application (`Esc` on an empty input).
///
/// Details:
/// - `Enter` submits: trimmed input searches, empty input loads top headlines.
/// - `Ctrl+L` clears the error line.
pub(super) fn handle_news_key(ke: KeyEvent, news: &mut NewsView, req: Requests<'_>) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => {
            if news.input.is_empty() {
                return true;
            }
            news.input.clear();
        }
        KeyCode::Enter => submit_news_input(news, req.news),
        KeyCode::Char('l') if ctrl => {
            dispatch_news(news, NewsAction::ClearError, req.news);
        }
        KeyCode::Up => move_article_sel(news, -1),
        KeyCode::Down => move_article_sel(news, 1),
        KeyCode::PageUp => move_article_sel(news, -5),
        KeyCode::PageDown => move_article_sel(news, 5),
        KeyCode::Backspace => {
            news.input.pop();
        }
        KeyCode::Char(ch) if !ctrl => news.input.push(ch),
        _ => {}
    }
    false
}
