//! Core non-UI logic: country filtering, list cursor movement, and fetch dispatch.

pub mod fetch;
pub mod filter;
pub mod selection;

pub use fetch::{dispatch_news, request_countries, submit_news_input};
pub use filter::{apply_country_filter_preserve_selection, filter_countries, filter_indices};
pub use selection::move_sel;
