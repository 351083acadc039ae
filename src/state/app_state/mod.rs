//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::state::types::{Country, FetchState, View};
use crate::store::NewsStore;

/// Screen rectangle `(x, y, width, height)` recorded by the renderer for mouse hit-testing.
pub type Rect = (u16, u16, u16, u16);

/// What: State of the countries view.
///
/// Details:
/// - `all` holds the fetch lifecycle and the unfiltered list.
/// - `filtered` is always `filter_countries(all, search_term)`.
/// - `detail` is the selected country; `None` means list mode.
#[derive(Debug, Default)]
pub struct CountriesView {
    /// Fetch lifecycle and full list.
    pub all: FetchState<Vec<Country>>,
    /// Current search term, used verbatim.
    pub search_term: String,
    /// Countries matching `search_term`, in directory order.
    pub filtered: Vec<Country>,
    /// Index into `filtered` that is highlighted.
    pub selected: usize,
    /// Widget state mirroring `selected`.
    pub list_state: ListState,
    /// Country shown in detail mode.
    pub detail: Option<Country>,
    /// Inner area of the rendered list (for mouse clicks).
    pub list_rect: Option<Rect>,
}

impl CountriesView {
    /// Whether the detail card is shown instead of the list.
    #[must_use]
    pub const fn in_detail_mode(&self) -> bool {
        self.detail.is_some()
    }
}

/// What: State of the news view.
///
/// Details:
/// - All fetch state lives in `store`; the view keeps only the input text and cursor.
#[derive(Debug, Default)]
pub struct NewsView {
    /// Async state container for news fetches.
    pub store: NewsStore,
    /// Search input text.
    pub input: String,
    /// Index into the store's articles that is highlighted.
    pub selected: usize,
    /// Widget state mirroring `selected`.
    pub list_state: ListState,
    /// Inner area of the rendered list (for mouse clicks).
    pub list_rect: Option<Rect>,
}

/// Application state shared by the event, worker, and UI layers.
///
/// Mutated only on the event loop task.
#[derive(Debug, Default)]
pub struct AppState {
    /// View currently shown.
    pub view: View,
    /// Countries view state.
    pub countries: CountriesView,
    /// News view state.
    pub news: NewsView,
}

impl AppState {
    /// What: Build the initial state around an injected news store.
    ///
    /// Inputs:
    /// - `store`: News container owned by the application for its whole life.
    /// - `view`: View to show first.
    #[must_use]
    pub fn new(store: NewsStore, view: View) -> Self {
        Self {
            view,
            countries: CountriesView::default(),
            news: NewsView {
                store,
                ..NewsView::default()
            },
        }
    }
}
