//! Core value types used by newsatlas state.

/// Flag image URLs published for a country.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Raster flag image.
    pub png: String,
    /// Vector flag image.
    pub svg: String,
}

/// Reference data for a single country.
///
/// Immutable once fetched. The whole list is replaced on every fetch, so no
/// identity beyond `name` is tracked.
#[derive(Clone, Debug, PartialEq)]
pub struct Country {
    /// Common English name, used as the display key.
    pub name: String,
    /// Population count.
    pub population: u64,
    /// Flag image URLs.
    pub flags: Flags,
    /// Surface area in square kilometres.
    pub area: f64,
    /// Continental region (e.g., "Africa").
    pub region: String,
    /// Subregion (e.g., "Eastern Africa"); empty when the directory has none.
    pub subregion: String,
}

/// A news article summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    /// Canonical article URL; unique key.
    pub url: String,
    /// Headline.
    pub title: String,
    /// Optional teaser text.
    pub description: Option<String>,
    /// Lead image URL when the publisher provides one.
    pub image_url: Option<String>,
    /// Publisher name (empty when unknown).
    pub source_name: String,
}

/// What: Lifecycle of a single fetch cycle.
///
/// Details:
/// - `Succeeded` carries the payload; `Failed` carries the user-facing message.
/// - A new fetch moves back to `Loading` regardless of the previous outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request resolved with data.
    Succeeded(T),
    /// The last request failed.
    Failed(String),
}

impl<T> FetchState<T> {
    /// What: Report whether a request is in flight.
    ///
    /// Output:
    /// - `true` only for `Loading`.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Payload of a successful fetch, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Succeeded(v) => Some(v),
            _ => None,
        }
    }

    /// Error message of a failed fetch, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Top-level view currently shown by the TUI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// News headlines and search.
    #[default]
    News,
    /// Country reference data.
    Countries,
}

impl View {
    /// What: Map a configuration value to a view.
    ///
    /// Inputs:
    /// - `key`: Value from `settings.conf` (`news` or `countries`, case-insensitive).
    ///
    /// Output:
    /// - `Some(View)` for a recognized key, `None` otherwise.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "news" | "headlines" => Some(Self::News),
            "countries" | "country" => Some(Self::Countries),
            _ => None,
        }
    }

    /// The other view; used by the `Tab` toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::News => Self::Countries,
            Self::Countries => Self::News,
        }
    }
}
