use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers::{CountriesOutcome, NewsOutcome};
use crate::store::Dispatched;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Requests flow from the event layer to the workers; outcomes flow back to
///   the event loop, which applies them in arrival order.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side drained by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Dispatched news fetches.
    pub news_req_tx: mpsc::UnboundedSender<Dispatched>,
    /// Receiving side owned by the news worker.
    pub news_req_rx: mpsc::UnboundedReceiver<Dispatched>,
    /// Tokened news outcomes.
    pub news_res_tx: mpsc::UnboundedSender<NewsOutcome>,
    /// Receiving side drained by the event loop.
    pub news_res_rx: mpsc::UnboundedReceiver<NewsOutcome>,
    /// Country directory fetch requests.
    pub country_req_tx: mpsc::UnboundedSender<()>,
    /// Receiving side owned by the country worker.
    pub country_req_rx: mpsc::UnboundedReceiver<()>,
    /// Country directory outcomes.
    pub country_res_tx: mpsc::UnboundedSender<CountriesOutcome>,
    /// Receiving side drained by the event loop.
    pub country_res_rx: mpsc::UnboundedReceiver<CountriesOutcome>,
}

impl Channels {
    /// Create every channel pair.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (news_req_tx, news_req_rx) = mpsc::unbounded_channel();
        let (news_res_tx, news_res_rx) = mpsc::unbounded_channel();
        let (country_req_tx, country_req_rx) = mpsc::unbounded_channel();
        let (country_res_tx, country_res_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            news_req_tx,
            news_req_rx,
            news_res_tx,
            news_res_rx,
            country_req_tx,
            country_req_rx,
            country_res_tx,
            country_res_rx,
        }
    }
}
