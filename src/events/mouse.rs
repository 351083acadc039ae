//! Mouse event handling: click-to-select and wheel scrolling in the lists.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::countries::{move_country_sel, open_detail};
use super::news::move_article_sel;
use crate::state::{AppState, View, app_state::Rect};
use crate::ui::{ARTICLE_ROW_HEIGHT, COUNTRY_ROW_HEIGHT};

/// What: Map a screen position to a list index.
///
/// Inputs:
/// - `rect`: Inner list area recorded by the renderer.
/// - `col`, `row`: Mouse position.
/// - `offset`: First visible item index.
/// - `row_height`: Lines per list item.
///
/// Output:
/// - `Some(index)` when the position is inside the list area.
fn index_at(rect: Rect, col: u16, row: u16, offset: usize, row_height: u16) -> Option<usize> {
    let (x, y, w, h) = rect;
    if col < x || col >= x.saturating_add(w) || row < y || row >= y.saturating_add(h) {
        return None;
    }
    Some(offset + usize::from((row - y) / row_height.max(1)))
}

/// What: Handle a single mouse event.
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Mutable application state (rects, lists, selection).
///
/// Details:
/// - Left click on a country opens its detail card; on an article it highlights it.
/// - Wheel scroll moves the cursor of the active list.
/// - Events outside the recorded list areas are ignored.
pub(super) fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    match (app.view, m.kind) {
        (View::Countries, _) if app.countries.in_detail_mode() => {}
        (View::Countries, MouseEventKind::Down(MouseButton::Left)) => {
            let view = &mut app.countries;
            let Some(rect) = view.list_rect else {
                return;
            };
            let offset = view.list_state.offset();
            if let Some(idx) = index_at(rect, m.column, m.row, offset, COUNTRY_ROW_HEIGHT)
                && idx < view.filtered.len()
            {
                view.selected = idx;
                view.list_state.select(Some(idx));
                open_detail(view);
            }
        }
        (View::Countries, MouseEventKind::ScrollDown) => move_country_sel(&mut app.countries, 1),
        (View::Countries, MouseEventKind::ScrollUp) => move_country_sel(&mut app.countries, -1),
        (View::News, MouseEventKind::Down(MouseButton::Left)) => {
            let news = &mut app.news;
            let Some(rect) = news.list_rect else {
                return;
            };
            let offset = news.list_state.offset();
            if let Some(idx) = index_at(rect, m.column, m.row, offset, ARTICLE_ROW_HEIGHT)
                && idx < news.store.state().articles.len()
            {
                news.selected = idx;
                news.list_state.select(Some(idx));
            }
        }
        (View::News, MouseEventKind::ScrollDown) => move_article_sel(&mut app.news, 1),
        (View::News, MouseEventKind::ScrollUp) => move_article_sel(&mut app.news, -1),
        _ => {}
    }
}
