use std::time::Duration;

use ratatui::style::Color;

use crate::sources::ApiConfig;
use crate::state::View;
use crate::store::{NewsDefaults, StalePolicy};

/// Upper bound the news API accepts for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade for highlighted rows.
    pub crust: Color,
    /// Subtle surface color for borders.
    pub surface2: Color,
    /// Muted overlay color for titles.
    pub overlay1: Color,
    /// Secondary muted color for descriptions.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive highlights.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// News API key; empty when not configured.
    pub news_api_key: String,
    /// Country code for top headlines.
    pub news_country: String,
    /// Articles per request, `1..=MAX_PAGE_SIZE`.
    pub news_page_size: u32,
    /// News API base URL.
    pub news_base_url: String,
    /// Country directory base URL.
    pub countries_base_url: String,
    /// Whole-request timeout in seconds.
    pub http_timeout_secs: u64,
    /// Handling of superseded news outcomes.
    pub stale_results: StalePolicy,
    /// View shown on startup.
    pub start_view: View,
}

impl Default for Settings {
    fn default() -> Self {
        let api = ApiConfig::default();
        Self {
            news_api_key: String::new(),
            news_country: "us".to_string(),
            news_page_size: 9,
            news_base_url: api.news_base_url,
            countries_base_url: api.countries_base_url,
            http_timeout_secs: api.request_timeout.as_secs(),
            stale_results: StalePolicy::default(),
            start_view: View::default(),
        }
    }
}

impl Settings {
    /// What: Derive client connection parameters.
    ///
    /// Output:
    /// - `ApiConfig` with the configured endpoints, key, and timeout; connect
    ///   timeout never exceeds the request timeout.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        let request_timeout = Duration::from_secs(self.http_timeout_secs.max(1));
        let defaults = ApiConfig::default();
        ApiConfig {
            countries_base_url: self.countries_base_url.clone(),
            news_base_url: self.news_base_url.clone(),
            news_api_key: self.news_api_key.clone(),
            connect_timeout: defaults.connect_timeout.min(request_timeout),
            request_timeout,
        }
    }

    /// Request parameters the news store fills in.
    #[must_use]
    pub fn news_defaults(&self) -> NewsDefaults {
        NewsDefaults {
            country: self.news_country.clone(),
            page_size: self.news_page_size,
        }
    }
}
