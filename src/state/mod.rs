//! Application state split into value types and the `AppState` container.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, CountriesView, NewsView};
pub use types::{Article, Country, FetchState, Flags, View};
