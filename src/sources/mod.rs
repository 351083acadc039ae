//! Remote data retrieval: the country directory and the news API.
//!
//! Transport lives on [`ApiClient`]; payload decoding is kept in pure
//! `parse_*` functions so the API boundary can be tested without a network.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

mod countries;
mod news;

pub use countries::parse_countries;
pub use news::{NewsRequest, parse_articles};

/// What: Failure taxonomy for a single fetch cycle.
///
/// Details:
/// - Every variant renders a user-facing message via `Display`; the store keeps
///   only that string.
/// - `NoResults` is a normal outcome for the user, not a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport or connectivity failure (DNS, connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success HTTP status or an error payload from the API.
    #[error("{message}")]
    Api {
        /// HTTP status code when the failure came from the status line.
        status: Option<u16>,
        /// Message reported by the API, or the HTTP reason phrase.
        message: String,
    },
    /// The payload did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    /// Well-formed response with an empty result list.
    #[error("No results found")]
    NoResults,
    /// A news request was attempted without an API key.
    #[error("No news API key configured (set news_api_key in settings.conf)")]
    MissingApiKey,
}

/// Result type alias for remote fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// What: Connection parameters for both remote APIs.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL of the country directory (no trailing path).
    pub countries_base_url: String,
    /// Base URL of the news API.
    pub news_base_url: String,
    /// News API key; empty means "not configured".
    pub news_api_key: String,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            countries_base_url: "https://restcountries.com".to_string(),
            news_base_url: "https://newsapi.org".to_string(),
            news_api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(20),
        }
    }
}

/// What: HTTP client for the country directory and the news API.
///
/// Details:
/// - Cheap to clone; clones share one connection pool.
/// - Holds the API key so callers never thread credentials through actions.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Shared pooled client.
    http: reqwest::Client,
    /// Endpoints and credentials.
    config: ApiConfig,
}

impl ApiClient {
    /// What: Build a client with timeouts and a product user agent.
    ///
    /// Inputs:
    /// - `config`: Endpoints, key, and timeouts.
    ///
    /// Output:
    /// - `Ok(ApiClient)`; `Err(FetchError::Network)` if the TLS backend cannot initialize.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest` fails to build the client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(format!("newsatlas/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Connection parameters this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// What: Build an absolute URL under `base` with query parameters.
    ///
    /// Inputs:
    /// - `base`: Base URL (with or without trailing slash).
    /// - `path`: Path beginning with `/`.
    /// - `params`: Query pairs; values are percent-encoded.
    ///
    /// Output:
    /// - Parsed `Url`, or `FetchError::Decode` when the configured base is not a URL.
    pub(crate) fn endpoint(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{path}", base.trim_end_matches('/'));
        Url::parse_with_params(&raw, params)
            .map_err(|e| FetchError::Decode(format!("invalid endpoint {raw}: {e}")))
    }

    /// What: Perform a GET and return the status and body text.
    ///
    /// Inputs:
    /// - `url`: Fully built request URL.
    ///
    /// Output:
    /// - `Ok((status, body))` for any HTTP status the server answered with;
    ///   `Err(FetchError::Network)` for transport failures.
    ///
    /// Details:
    /// - Status handling is left to the caller because the news API reports
    ///   failures as JSON bodies with non-2xx codes.
    /// - Transport errors are stripped of the request URL, which carries the API key.
    async fn get_text(&self, url: Url) -> Result<(reqwest::StatusCode, String)> {
        debug!(host = url.host_str().unwrap_or(""), path = url.path(), "GET");
        let resp = self.http.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "request failed");
            FetchError::Network(e.to_string())
        })?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body))
    }
}

#[cfg(test)]
mod tests;
