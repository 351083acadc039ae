//! Event loop: the single writer of [`AppState`].

use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;
use tracing::{info, warn};

use super::channels::Channels;
use super::terminal::{restore_terminal, setup_terminal};
use super::workers::{
    CountriesOutcome, NewsOutcome, spawn_country_worker, spawn_event_thread, spawn_news_worker,
};
use crate::config::Settings;
use crate::events::{Requests, handle_event};
use crate::logic::{apply_country_filter_preserve_selection, dispatch_news, request_countries};
use crate::sources::ApiClient;
use crate::state::{AppState, FetchState};
use crate::store::{NewsAction, NewsStore, Resolution};
use crate::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Set to `1` to run without a TTY (no raw mode, no event thread, no drawing).
pub const HEADLESS_ENV: &str = "NEWSATLAS_TEST_HEADLESS";

/// What: Run the newsatlas TUI end-to-end.
///
/// Inputs:
/// - `settings`: Effective settings (file, environment, and CLI already merged).
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal or client setup failures.
///
/// Details:
/// - Builds the API client and the news store, spawns the workers and the
///   terminal event thread, then starts the initial country fetch and the
///   top-headlines fetch.
/// - Each loop iteration draws one frame, then waits for a terminal event or a
///   worker outcome. Outcomes are applied in arrival order.
/// - Restores the terminal before returning.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");

    let client = ApiClient::new(settings.api_config())?;
    if client.config().news_api_key.trim().is_empty() {
        warn!("no news API key configured; news requests will fail");
    }
    let store = NewsStore::new(settings.news_defaults(), settings.stale_results);
    let mut app = AppState::new(store, settings.start_view);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let Channels {
        event_tx,
        mut event_rx,
        event_thread_cancelled,
        news_req_tx,
        news_req_rx,
        news_res_tx,
        mut news_res_rx,
        country_req_tx,
        country_req_rx,
        country_res_tx,
        mut country_res_rx,
    } = Channels::new();

    spawn_news_worker(news_req_rx, client.clone(), news_res_tx);
    spawn_country_worker(country_req_rx, client, country_res_tx);
    spawn_event_thread(headless, event_tx, event_thread_cancelled.clone());

    request_countries(&mut app.countries, &country_req_tx);
    dispatch_news(&mut app.news, NewsAction::FetchTopHeadlines, &news_req_tx);

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = event_rx.recv() => {
                let req = Requests {
                    news: &news_req_tx,
                    countries: &country_req_tx,
                };
                if handle_event(ev, &mut app, req) {
                    break;
                }
            }
            Some(outcome) = news_res_rx.recv() => handle_news_outcome(&mut app, outcome),
            Some(outcome) = country_res_rx.recv() => handle_countries_outcome(&mut app, outcome),
            else => break,
        }
    }

    event_thread_cancelled.store(true, Ordering::Relaxed);
    if terminal.is_some() {
        restore_terminal()?;
    }
    info!("event loop finished");
    Ok(())
}

/// What: Apply a news outcome to the store and keep the cursor in range.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Tokened result from the news worker.
fn handle_news_outcome(app: &mut AppState, outcome: NewsOutcome) {
    let NewsOutcome { token, result } = outcome;
    if app.news.store.resolve(token, result) == Resolution::Stale {
        return;
    }
    let len = app.news.store.state().articles.len();
    if len == 0 {
        app.news.selected = 0;
        app.news.list_state.select(None);
    } else {
        app.news.selected = app.news.selected.min(len - 1);
        app.news.list_state.select(Some(app.news.selected));
    }
}

/// What: Store the country directory outcome and reapply the current filter.
///
/// Inputs:
/// - `app`: Application state.
/// - `outcome`: Country list or the classified failure.
///
/// Details:
/// - A failure keeps the view usable: the message is shown and `F5` retries.
fn handle_countries_outcome(app: &mut AppState, outcome: CountriesOutcome) {
    app.countries.all = match outcome {
        Ok(list) => {
            info!(count = list.len(), "country directory loaded");
            FetchState::Succeeded(list)
        }
        Err(err) => FetchState::Failed(err.to_string()),
    };
    apply_country_filter_preserve_selection(&mut app.countries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::state::{Article, Country, Flags, View};

    fn article(title: &str) -> Article {
        Article {
            url: format!("https://example.com/{title}"),
            title: title.to_string(),
            description: None,
            image_url: None,
            source_name: "Example".to_string(),
        }
    }

    #[test]
    /// What: A stale news outcome leaves the state and cursor untouched.
    ///
    /// Inputs:
    /// - Two dispatches; the older one resolves after the newer one.
    ///
    /// Output:
    /// - Articles of the newer fetch remain; the old payload is ignored.
    fn news_outcome_stale_is_ignored() {
        let mut app = AppState::new(NewsStore::default(), View::News);
        let first = app
            .news
            .store
            .dispatch(NewsAction::FetchTopHeadlines)
            .expect("fetch action");
        let second = app
            .news
            .store
            .dispatch(NewsAction::FetchBySearch("rust".to_string()))
            .expect("fetch action");

        handle_news_outcome(
            &mut app,
            NewsOutcome {
                token: second.token,
                result: Ok(vec![article("a"), article("b")]),
            },
        );
        app.news.selected = 1;
        handle_news_outcome(
            &mut app,
            NewsOutcome {
                token: first.token,
                result: Ok(vec![article("old")]),
            },
        );
        let titles: Vec<&str> = app
            .news
            .store
            .state()
            .articles
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(app.news.selected, 1);
        assert!(!app.news.store.state().loading);
    }

    #[test]
    /// What: An applied outcome clamps the article cursor to the new list.
    fn news_outcome_clamps_cursor() {
        let mut app = AppState::new(NewsStore::default(), View::News);
        let d = app
            .news
            .store
            .dispatch(NewsAction::FetchTopHeadlines)
            .expect("fetch action");
        app.news.selected = 7;
        handle_news_outcome(
            &mut app,
            NewsOutcome {
                token: d.token,
                result: Ok(vec![article("only")]),
            },
        );
        assert_eq!(app.news.selected, 0);
        assert_eq!(app.news.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Country outcomes set the lifecycle and reapply the active term.
    ///
    /// Inputs:
    /// - Term `ke` typed while loading; then a successful fetch; then a failure.
    ///
    /// Output:
    /// - Filtered list reflects the term; a failure keeps the message and empties the list.
    fn countries_outcome_applies_filter_and_failure() {
        let mut app = AppState::new(NewsStore::default(), View::Countries);
        app.countries.all = FetchState::Loading;
        app.countries.search_term = "ke".to_string();

        let country = |name: &str| Country {
            name: name.to_string(),
            population: 1,
            flags: Flags::default(),
            area: 1.0,
            region: String::new(),
            subregion: String::new(),
        };
        handle_countries_outcome(
            &mut app,
            Ok(vec![country("Kenya"), country("Uganda"), country("Turkey")]),
        );
        let names: Vec<&str> = app
            .countries
            .filtered
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Kenya", "Turkey"]);

        handle_countries_outcome(&mut app, Err(FetchError::Network("timeout".to_string())));
        assert_eq!(app.countries.all.error(), Some("Network error: timeout"));
        assert!(app.countries.filtered.is_empty());
    }
}
