use super::*;

/// What: Build a minimal article keyed by `url`.
fn article(url: &str) -> Article {
    Article {
        url: url.to_string(),
        title: format!("title for {url}"),
        description: None,
        image_url: None,
        source_name: "Test".to_string(),
    }
}

#[test]
/// What: A fresh store is idle and empty.
fn new_store_is_idle() {
    let store = NewsStore::default();
    assert_eq!(store.state(), &NewsState::default());
    assert_eq!(store.status(), FetchState::Idle);
}

#[test]
/// What: Dispatch applies the pending transition before any outcome.
///
/// Inputs:
/// - A store holding an error from a previous failure.
///
/// Output:
/// - `loading == true`, `error` empty, and a top-headlines request using the defaults.
fn dispatch_sets_loading_and_clears_error_synchronously() {
    let mut store = NewsStore::new(
        NewsDefaults {
            country: "ke".to_string(),
            page_size: 5,
        },
        StalePolicy::DiscardStale,
    );
    let first = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(first.token, Err(FetchError::Network("down".into())));
    assert!(!store.state().error.is_empty());

    let d = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    assert!(store.state().loading);
    assert!(store.state().error.is_empty());
    assert_eq!(store.status(), FetchState::Loading);
    assert_eq!(
        d.request,
        NewsRequest::TopHeadlines {
            country: "ke".to_string(),
            page_size: 5
        }
    );
    assert!(d.token > first.token);
}

#[test]
/// What: Search dispatch trims the query; a blank query falls back to headlines.
fn search_dispatch_trims_and_blank_falls_back() {
    let mut store = NewsStore::default();
    let d = store
        .dispatch(NewsAction::FetchBySearch("  rust lang ".to_string()))
        .expect("fetch action");
    assert_eq!(
        d.request,
        NewsRequest::Search {
            query: "rust lang".to_string(),
            page_size: 9
        }
    );
    let d = store
        .dispatch(NewsAction::FetchBySearch("   ".to_string()))
        .expect("fetch action");
    assert!(matches!(d.request, NewsRequest::TopHeadlines { .. }));
}

#[test]
/// What: Fulfilled transition replaces articles and clears loading.
fn fulfilled_replaces_articles() {
    let mut store = NewsStore::default();
    let d = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    let payload = vec![article("a"), article("b")];
    assert_eq!(store.resolve(d.token, Ok(payload.clone())), Resolution::Applied);
    assert!(!store.state().loading);
    assert_eq!(store.state().articles, payload);
    assert!(store.state().error.is_empty());
    assert_eq!(store.status(), FetchState::Succeeded(2));
}

#[test]
/// What: Rejected transition keeps the previous articles and records the message.
fn rejected_keeps_articles_and_sets_error() {
    let mut store = NewsStore::default();
    let d = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(d.token, Ok(vec![article("a")]));

    let d = store
        .dispatch(NewsAction::FetchBySearch("x".to_string()))
        .expect("fetch action");
    let err = FetchError::Api {
        status: Some(429),
        message: "You have made too many requests".to_string(),
    };
    store.resolve(d.token, Err(err.clone()));
    assert!(!store.state().loading);
    assert_eq!(store.state().articles, vec![article("a")]);
    assert_eq!(store.state().error, err.to_string());
    assert_eq!(store.status(), FetchState::Failed(err.to_string()));
}

#[test]
/// What: Zero articles surface as an error with an empty list, without panicking.
fn no_results_sets_error_and_empties_articles() {
    let mut store = NewsStore::default();
    let d = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(d.token, Err(FetchError::NoResults));
    assert!(!store.state().loading);
    assert!(store.state().articles.is_empty());
    assert_eq!(store.state().error, "No results found");
}

#[test]
/// What: `ClearError` clears the message and does not start a fetch.
fn clear_error_returns_none() {
    let mut store = NewsStore::default();
    let d = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(d.token, Err(FetchError::MissingApiKey));
    assert!(store.dispatch(NewsAction::ClearError).is_none());
    assert!(store.state().error.is_empty());
    assert!(!store.state().loading);
}

#[test]
/// What: Under `DiscardStale`, an older outcome arriving last is ignored.
///
/// Inputs:
/// - Two overlapping dispatches; the newer resolves first, then the older.
///
/// Output:
/// - State reflects the newer result; the older returns `Resolution::Stale`.
fn discard_stale_ignores_superseded_outcome() {
    let mut store = NewsStore::new(NewsDefaults::default(), StalePolicy::DiscardStale);
    let old = store
        .dispatch(NewsAction::FetchBySearch("old".to_string()))
        .expect("fetch action");
    let new = store
        .dispatch(NewsAction::FetchBySearch("new".to_string()))
        .expect("fetch action");

    assert_eq!(store.resolve(new.token, Ok(vec![article("new")])), Resolution::Applied);
    assert!(!store.state().loading);
    assert_eq!(
        store.resolve(old.token, Err(FetchError::Network("late".into()))),
        Resolution::Stale
    );
    assert_eq!(store.state().articles, vec![article("new")]);
    assert!(store.state().error.is_empty());
}

#[test]
/// What: A stale outcome arriving before the latest does not clear `loading`.
fn discard_stale_keeps_loading_until_latest_resolves() {
    let mut store = NewsStore::default();
    let old = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    let new = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(old.token, Ok(vec![article("old")]));
    assert!(store.state().loading);
    assert!(store.state().articles.is_empty());
    store.resolve(new.token, Ok(vec![article("new")]));
    assert!(!store.state().loading);
    assert_eq!(store.state().articles, vec![article("new")]);
}

#[test]
/// What: Under `LastResolvedWins`, the last arriving outcome is applied.
///
/// Inputs:
/// - Two overlapping dispatches; the newer resolves first, then the older.
///
/// Output:
/// - Articles come from the older request (the documented race).
fn last_resolved_wins_applies_late_outcome() {
    let mut store = NewsStore::new(NewsDefaults::default(), StalePolicy::LastResolvedWins);
    let old = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    let new = store
        .dispatch(NewsAction::FetchTopHeadlines)
        .expect("fetch action");
    store.resolve(new.token, Ok(vec![article("new")]));
    assert_eq!(store.resolve(old.token, Ok(vec![article("old")])), Resolution::Applied);
    assert_eq!(store.state().articles, vec![article("old")]);
    assert!(!store.state().loading);
}

#[test]
/// What: Config keys map onto stale policies.
fn stale_policy_from_config_key() {
    assert_eq!(
        StalePolicy::from_config_key("discard"),
        Some(StalePolicy::DiscardStale)
    );
    assert_eq!(
        StalePolicy::from_config_key("Last-Wins"),
        Some(StalePolicy::LastResolvedWins)
    );
    assert_eq!(StalePolicy::from_config_key("random"), None);
}
