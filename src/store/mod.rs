//! Async state container for the news view.
//!
//! The store is a plain value owned by the application state. It never does
//! I/O: [`NewsStore::dispatch`] applies the *pending* transition and hands back
//! the request to execute, and [`NewsStore::resolve`] applies the *fulfilled* or
//! *rejected* transition when the outcome arrives.
//!
//! Each dispatched fetch gets a monotonically increasing [`RequestToken`]. With
//! the default [`StalePolicy::DiscardStale`], only the outcome of the most
//! recent dispatch can change the articles or the error.

use tracing::debug;

use crate::sources::{FetchError, NewsRequest};
use crate::state::{Article, FetchState};

/// Identifier of one dispatched fetch; later dispatches get larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw token value (for logging).
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Actions accepted by [`NewsStore::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsAction {
    /// Load top headlines for the configured country.
    FetchTopHeadlines,
    /// Search all articles for a query.
    FetchBySearch(String),
    /// Clear the current error message without fetching.
    ClearError,
}

/// What: How the store treats an outcome that is not for the latest dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Ignore outcomes of superseded requests.
    #[default]
    DiscardStale,
    /// Apply every outcome in arrival order; a slow older request can
    /// overwrite a newer result.
    LastResolvedWins,
}

impl StalePolicy {
    /// What: Map a `stale_results` config value to a policy.
    ///
    /// Inputs:
    /// - `key`: `discard` or `last_wins` (a few aliases accepted).
    ///
    /// Output:
    /// - `Some(StalePolicy)` when recognized.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "discard" | "discard_stale" | "latest" => Some(Self::DiscardStale),
            "last_wins" | "last_resolved_wins" | "arrival" => Some(Self::LastResolvedWins),
            _ => None,
        }
    }
}

/// Parameters the store fills into fetch requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsDefaults {
    /// Country code for top headlines.
    pub country: String,
    /// Page size for both endpoints.
    pub page_size: u32,
}

impl Default for NewsDefaults {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            page_size: 9,
        }
    }
}

/// Snapshot observed by the view layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsState {
    /// Articles from the last applied successful fetch.
    pub articles: Vec<Article>,
    /// `true` while the most recently dispatched fetch is unresolved.
    pub loading: bool,
    /// Message of the last applied failure; empty otherwise.
    pub error: String,
}

/// Output of a fetch dispatch: the token to resolve with and the request to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
    /// Token identifying this fetch.
    pub token: RequestToken,
    /// Request the caller must execute.
    pub request: NewsRequest,
}

/// Whether an outcome changed the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Fulfilled/rejected transition applied.
    Applied,
    /// Superseded outcome ignored.
    Stale,
}

/// What: Pending/fulfilled/rejected state machine for news fetches.
///
/// Details:
/// - Single writer: mutated only through `dispatch` and `resolve`.
/// - Overlapping fetches are not coalesced; each dispatch issues its own request.
#[derive(Debug)]
pub struct NewsStore {
    /// Observable snapshot.
    state: NewsState,
    /// Stale outcome handling.
    policy: StalePolicy,
    /// Country and page size filled into requests.
    defaults: NewsDefaults,
    /// Last issued token value; 0 means nothing dispatched yet.
    latest: u64,
    /// Whether the latest dispatched fetch has resolved.
    latest_resolved: bool,
}

impl Default for NewsStore {
    fn default() -> Self {
        Self::new(NewsDefaults::default(), StalePolicy::default())
    }
}

impl NewsStore {
    /// What: Create an idle store.
    ///
    /// Inputs:
    /// - `defaults`: Country and page size for requests.
    /// - `policy`: Stale outcome handling.
    #[must_use]
    pub fn new(defaults: NewsDefaults, policy: StalePolicy) -> Self {
        Self {
            state: NewsState::default(),
            policy,
            defaults,
            latest: 0,
            latest_resolved: true,
        }
    }

    /// Current snapshot (`{articles, loading, error}`).
    #[must_use]
    pub const fn state(&self) -> &NewsState {
        &self.state
    }

    /// What: Summarize the snapshot as a `FetchState`.
    ///
    /// Output:
    /// - `Idle` before the first dispatch, `Loading` while pending,
    ///   `Failed(error)` after a failure, otherwise `Succeeded(article_count)`.
    #[must_use]
    pub fn status(&self) -> FetchState<usize> {
        if self.latest == 0 {
            FetchState::Idle
        } else if self.state.loading {
            FetchState::Loading
        } else if !self.state.error.is_empty() {
            FetchState::Failed(self.state.error.clone())
        } else {
            FetchState::Succeeded(self.state.articles.len())
        }
    }

    /// What: Apply an action.
    ///
    /// Inputs:
    /// - `action`: Fetch or clear-error action.
    ///
    /// Output:
    /// - `Some(Dispatched)` for fetch actions; `None` for `ClearError`.
    ///
    /// Details:
    /// - Fetch actions synchronously set `loading = true` and clear `error`;
    ///   `articles` are left untouched until the outcome is resolved.
    /// - A blank search query falls back to top headlines.
    pub fn dispatch(&mut self, action: NewsAction) -> Option<Dispatched> {
        let request = match action {
            NewsAction::ClearError => {
                self.state.error.clear();
                debug!("news/clearError");
                return None;
            }
            NewsAction::FetchBySearch(query) if !query.trim().is_empty() => NewsRequest::Search {
                query: query.trim().to_string(),
                page_size: self.defaults.page_size,
            },
            NewsAction::FetchTopHeadlines | NewsAction::FetchBySearch(_) => {
                NewsRequest::TopHeadlines {
                    country: self.defaults.country.clone(),
                    page_size: self.defaults.page_size,
                }
            }
        };
        self.latest += 1;
        self.latest_resolved = false;
        self.state.loading = true;
        self.state.error.clear();
        let token = RequestToken(self.latest);
        debug!(token = token.0, ?request, "news/pending");
        Some(Dispatched { token, request })
    }

    /// What: Apply the outcome of a dispatched fetch.
    ///
    /// Inputs:
    /// - `token`: Token returned by `dispatch`.
    /// - `result`: Articles or the classified failure.
    ///
    /// Output:
    /// - `Resolution::Applied` when the state changed, `Resolution::Stale` when ignored.
    ///
    /// Details:
    /// - Fulfilled: `articles = payload`, `error` cleared.
    /// - Rejected: `error = message`, `articles` unchanged, except `NoResults`
    ///   which also empties `articles`.
    /// - `loading` is recomputed from whether the latest token has resolved, so
    ///   a stale outcome applied under `LastResolvedWins` keeps `loading` set.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Article>, FetchError>,
    ) -> Resolution {
        let is_latest = token.0 == self.latest;
        if !is_latest && self.policy == StalePolicy::DiscardStale {
            debug!(token = token.0, latest = self.latest, "news/stale outcome discarded");
            return Resolution::Stale;
        }
        if is_latest {
            self.latest_resolved = true;
        }
        self.state.loading = !self.latest_resolved;
        match result {
            Ok(articles) => {
                debug!(token = token.0, count = articles.len(), "news/fulfilled");
                self.state.articles = articles;
                self.state.error.clear();
            }
            Err(err) => {
                debug!(token = token.0, error = %err, "news/rejected");
                if err == FetchError::NoResults {
                    self.state.articles.clear();
                }
                self.state.error = err.to_string();
            }
        }
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests;
