//! Fetch dispatch: apply the pending transition, then hand the request to a worker.

use tokio::sync::mpsc;

use crate::sources::FetchError;
use crate::state::{CountriesView, FetchState, NewsView};
use crate::store::{Dispatched, NewsAction};

/// Failure message when a worker's request channel is closed.
const WORKER_GONE: &str = "background worker unavailable";

/// What: Dispatch a news action and hand the resulting request to the news worker.
///
/// Inputs:
/// - `news`: News view owning the store.
/// - `action`: Action to dispatch.
/// - `news_req_tx`: Channel to the news worker.
///
/// Output:
/// - `true` when a fetch was started.
///
/// Details:
/// - The pending transition is applied before the request is sent, so the next
///   frame already shows `loading`.
/// - The article cursor is reset for fetches; the list it points into is about to change.
/// - If the worker is gone the request is rejected at once, so `loading` clears.
pub fn dispatch_news(
    news: &mut NewsView,
    action: NewsAction,
    news_req_tx: &mpsc::UnboundedSender<Dispatched>,
) -> bool {
    let Some(dispatched) = news.store.dispatch(action) else {
        return false;
    };
    news.selected = 0;
    news.list_state.select(None);
    if let Err(mpsc::error::SendError(dropped)) = news_req_tx.send(dispatched) {
        tracing::warn!(
            token = dropped.token.value(),
            "news worker channel closed; request dropped"
        );
        news.store.resolve(
            dropped.token,
            Err(FetchError::Network(WORKER_GONE.to_string())),
        );
        return false;
    }
    true
}

/// What: Submit the news search input.
///
/// Inputs:
/// - `news`: News view with the current input text.
/// - `news_req_tx`: Channel to the news worker.
///
/// Details:
/// - Non-empty trimmed input searches; empty input loads top headlines.
pub fn submit_news_input(news: &mut NewsView, news_req_tx: &mpsc::UnboundedSender<Dispatched>) {
    let query = news.input.trim().to_string();
    let action = if query.is_empty() {
        NewsAction::FetchTopHeadlines
    } else {
        NewsAction::FetchBySearch(query)
    };
    dispatch_news(news, action, news_req_tx);
}

/// What: Start a country directory fetch.
///
/// Inputs:
/// - `countries`: Countries view; its lifecycle moves to `Loading`.
/// - `country_req_tx`: Channel to the country worker.
///
/// Output:
/// - `false` when a fetch is already in flight (nothing sent), or when the
///   worker is gone; the lifecycle is then `Failed`.
pub fn request_countries(
    countries: &mut CountriesView,
    country_req_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    if countries.all.is_loading() {
        return false;
    }
    countries.all = FetchState::Loading;
    if country_req_tx.send(()).is_err() {
        tracing::warn!("country worker channel closed; request dropped");
        let err = FetchError::Network(WORKER_GONE.to_string());
        countries.all = FetchState::Failed(err.to_string());
        return false;
    }
    true
}
