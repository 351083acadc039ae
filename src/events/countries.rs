//! Key handling for the countries view.
//!
//! List mode edits the search term and moves the cursor; detail mode only
//! understands the back keys (`Esc`, `Backspace`, `Left`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Requests;
use crate::logic::{apply_country_filter_preserve_selection, move_sel, request_countries};
use crate::state::CountriesView;

/// Rows moved by `PageUp`/`PageDown`.
const PAGE: isize = 10;

/// What: Enter detail mode for the highlighted country.
///
/// Output:
/// - `true` when a country was selected; `false` for an empty list.
pub(super) fn open_detail(view: &mut CountriesView) -> bool {
    let Some(country) = view.filtered.get(view.selected).cloned() else {
        return false;
    };
    tracing::debug!(country = %country.name, "country selected");
    view.detail = Some(country);
    true
}

/// Leave detail mode; the filtered list and cursor are untouched.
pub(super) fn back_to_list(view: &mut CountriesView) {
    view.detail = None;
}

/// Cursor movement over the filtered list.
pub(super) fn move_country_sel(view: &mut CountriesView, delta: isize) {
    let len = view.filtered.len();
    move_sel(&mut view.selected, &mut view.list_state, len, delta);
}

/// What: Handle a key press while the countries view is active.
///
/// Inputs:
/// - `ke`: Key event (press only).
/// - `view`: Countries view state.
/// - `req`: Worker request channels (for `F5` refetch).
///
/// Output:
/// - `true` to exit the application (`Esc` on an empty search term in list mode).
pub(super) fn handle_countries_key(ke: KeyEvent, view: &mut CountriesView, req: Requests<'_>) -> bool {
    if view.in_detail_mode() {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
            back_to_list(view);
        }
        return false;
    }
    match ke.code {
        KeyCode::Esc => {
            if view.search_term.is_empty() {
                return true;
            }
            view.search_term.clear();
            apply_country_filter_preserve_selection(view);
        }
        KeyCode::Enter => {
            open_detail(view);
        }
        KeyCode::Up => move_country_sel(view, -1),
        KeyCode::Down => move_country_sel(view, 1),
        KeyCode::PageUp => move_country_sel(view, -PAGE),
        KeyCode::PageDown => move_country_sel(view, PAGE),
        KeyCode::Home => move_country_sel(view, isize::MIN),
        KeyCode::End => move_country_sel(view, isize::MAX),
        KeyCode::F(5) => {
            request_countries(view, req.countries);
        }
        KeyCode::Backspace => {
            if view.search_term.pop().is_some() {
                apply_country_filter_preserve_selection(view);
            }
        }
        KeyCode::Char(ch) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            view.search_term.push(ch);
            apply_country_filter_preserve_selection(view);
        }
        _ => {}
    }
    false
}
