//! Background workers.
//!
//! Each fetch runs in its own tokio task and reports back over an unbounded
//! channel; the event loop applies outcomes in arrival order. Workers never
//! touch `AppState`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::sources::{ApiClient, FetchError};
use crate::state::{Article, Country};
use crate::store::{Dispatched, RequestToken};

/// Outcome of one dispatched news fetch, tagged with its request token.
#[derive(Debug)]
pub struct NewsOutcome {
    /// Token the store issued for the request.
    pub token: RequestToken,
    /// Articles or the classified failure.
    pub result: Result<Vec<Article>, FetchError>,
}

/// Outcome of a country directory fetch.
pub type CountriesOutcome = Result<Vec<Country>, FetchError>;

/// What: Execute one dispatched news request in a new task.
///
/// Inputs:
/// - `client`: Shared API client.
/// - `dispatched`: Token and request returned by the store.
/// - `res_tx`: Channel the outcome is sent on.
///
/// Output:
/// - Handle of the spawned task.
///
/// Details:
/// - The outcome is sent even if the request has since been superseded; the
///   store decides whether it still applies.
pub fn spawn_news_fetch(
    client: ApiClient,
    dispatched: Dispatched,
    res_tx: mpsc::UnboundedSender<NewsOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Dispatched { token, request } = dispatched;
        let result = client.execute(&request).await;
        match &result {
            Ok(articles) => debug!(token = token.value(), count = articles.len(), "news fetch done"),
            Err(err) => warn!(token = token.value(), error = %err, "news fetch failed"),
        }
        if res_tx.send(NewsOutcome { token, result }).is_err() {
            debug!(token = token.value(), "news outcome dropped; event loop gone");
        }
    })
}

/// What: Execute one country directory fetch in a new task.
///
/// Inputs:
/// - `client`: Shared API client.
/// - `res_tx`: Channel the outcome is sent on.
///
/// Output:
/// - Handle of the spawned task.
pub fn spawn_country_fetch(
    client: ApiClient,
    res_tx: mpsc::UnboundedSender<CountriesOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = client.fetch_countries().await;
        match &result {
            Ok(list) => debug!(count = list.len(), "country fetch done"),
            Err(err) => warn!(error = %err, "country fetch failed"),
        }
        if res_tx.send(result).is_err() {
            debug!("country outcome dropped; event loop gone");
        }
    })
}

/// What: Serve news requests until the request channel closes.
///
/// Inputs:
/// - `req_rx`: Dispatched requests from the event layer.
/// - `client`: Shared API client.
/// - `res_tx`: Outcome channel back to the event loop.
///
/// Details:
/// - No coalescing: every request gets its own task, so overlapping fetches
///   run concurrently.
pub fn spawn_news_worker(
    mut req_rx: mpsc::UnboundedReceiver<Dispatched>,
    client: ApiClient,
    res_tx: mpsc::UnboundedSender<NewsOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(dispatched) = req_rx.recv().await {
            spawn_news_fetch(client.clone(), dispatched, res_tx.clone());
        }
    })
}

/// What: Serve country directory requests until the request channel closes.
pub fn spawn_country_worker(
    mut req_rx: mpsc::UnboundedReceiver<()>,
    client: ApiClient,
    res_tx: mpsc::UnboundedSender<CountriesOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while req_rx.recv().await.is_some() {
            spawn_country_fetch(client.clone(), res_tx.clone());
        }
    })
}

/// What: Read terminal events on a dedicated thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Channel for raw crossterm events.
/// - `cancelled`: Set on exit; the thread stops at its next poll.
///
/// Details:
/// - Polls with a 50 ms timeout so cancellation is noticed promptly.
/// - Exits when the receiving side is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
