//! List cursor movement shared by the countries and news views.

use ratatui::widgets::ListState;

/// What: Move a list cursor by `delta`, clamped to `0..len`.
///
/// Inputs:
/// - `selected`: Current index, updated in place.
/// - `list_state`: Widget state kept in sync with `selected`.
/// - `len`: Number of rows.
/// - `delta`: Signed step (e.g. `-1`, `1`, or a page size).
///
/// Details:
/// - An empty list clears the widget selection.
pub fn move_sel(selected: &mut usize, list_state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        *selected = 0;
        list_state.select(None);
        return;
    }
    *selected = selected.saturating_add_signed(delta).min(len - 1);
    list_state.select(Some(*selected));
}
