//! Unit tests for payload decoding and endpoint construction.

use super::*;

#[test]
/// What: Map the nested directory shape onto flat `Country` values.
///
/// Inputs:
/// - Two directory records, one lacking `subregion` and `area`.
///
/// Output:
/// - Names come from `name.common`; missing fields fall back to defaults.
fn parse_countries_maps_common_name_and_tolerates_missing_fields() {
    let body = r#"[
        {"name":{"common":"Kenya","official":"Republic of Kenya"},
         "population":53771300,
         "flags":{"png":"https://flagcdn.com/w320/ke.png","svg":"https://flagcdn.com/ke.svg","alt":"x"},
         "area":580367.0,"region":"Africa","subregion":"Eastern Africa"},
        {"name":{"common":"Antarctica"},"population":1000,
         "flags":{"png":"a.png","svg":"a.svg"},"region":"Antarctic"}
    ]"#;
    let countries = parse_countries(body).expect("valid payload");
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name, "Kenya");
    assert_eq!(countries[0].population, 53_771_300);
    assert_eq!(countries[0].flags.png, "https://flagcdn.com/w320/ke.png");
    assert_eq!(countries[0].subregion, "Eastern Africa");
    assert_eq!(countries[1].name, "Antarctica");
    assert!(countries[1].subregion.is_empty());
    assert!(countries[1].area.abs() < f64::EPSILON);
}

#[test]
/// What: Reject payloads that are not a list of countries.
///
/// Inputs:
/// - An object instead of an array; an empty array.
///
/// Output:
/// - `Decode` for the wrong shape, `NoResults` for the empty list.
fn parse_countries_classifies_bad_and_empty_payloads() {
    assert!(matches!(
        parse_countries(r#"{"status":404,"message":"Not Found"}"#),
        Err(FetchError::Decode(_))
    ));
    assert_eq!(parse_countries("[]"), Err(FetchError::NoResults));
}

#[test]
/// What: Decode news articles and drop withdrawn entries.
///
/// Inputs:
/// - Envelope with one normal article, one `[Removed]` article, one without URL.
///
/// Output:
/// - Only the normal article survives with all consumed fields mapped.
fn parse_articles_maps_fields_and_drops_removed() {
    let body = r#"{
        "status":"ok","totalResults":3,
        "articles":[
            {"source":{"id":null,"name":"BBC News"},"author":"x",
             "title":"Rust 2.0 announced","description":"Big news",
             "url":"https://example.com/a","urlToImage":"https://example.com/a.jpg",
             "publishedAt":"2026-10-15T00:00:00Z","content":null},
            {"source":{"id":null,"name":"[Removed]"},"title":"[Removed]",
             "description":"[Removed]","url":"https://removed.com","urlToImage":null},
            {"source":{"name":"Nobody"},"title":"No link","url":null}
        ]}"#;
    let articles = parse_articles(body).expect("valid payload");
    assert_eq!(articles.len(), 1);
    let a = &articles[0];
    assert_eq!(a.url, "https://example.com/a");
    assert_eq!(a.title, "Rust 2.0 announced");
    assert_eq!(a.description.as_deref(), Some("Big news"));
    assert_eq!(a.image_url.as_deref(), Some("https://example.com/a.jpg"));
    assert_eq!(a.source_name, "BBC News");
}

#[test]
/// What: Surface the API's own error message.
///
/// Inputs:
/// - `{"status":"error","code":"apiKeyInvalid","message":...}`.
///
/// Output:
/// - `FetchError::Api` whose `Display` is the API message.
fn parse_articles_reports_api_error_message() {
    let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
    let err = parse_articles(body).expect_err("error envelope");
    assert_eq!(
        err,
        FetchError::Api {
            status: None,
            message: "Your API key is invalid.".to_string()
        }
    );
    assert_eq!(err.to_string(), "Your API key is invalid.");
}

#[test]
/// What: Treat an empty article list as `NoResults` and garbage as `Decode`.
fn parse_articles_empty_and_malformed() {
    assert_eq!(
        parse_articles(r#"{"status":"ok","totalResults":0,"articles":[]}"#),
        Err(FetchError::NoResults)
    );
    assert!(matches!(
        parse_articles("<html>502</html>"),
        Err(FetchError::Decode(_))
    ));
    assert!(matches!(
        parse_articles(r#"{"status":"ok"}"#),
        Err(FetchError::Decode(_))
    ));
}

#[test]
/// What: Build endpoint URLs with encoded query parameters.
///
/// Inputs:
/// - Base with trailing slash, a query containing spaces and `&`.
///
/// Output:
/// - No double slash; parameters are percent/form encoded.
fn endpoint_joins_base_and_encodes_params() {
    let url = ApiClient::endpoint(
        "https://newsapi.org/",
        "/v2/everything",
        &[("q", "rust & tokio"), ("pageSize", "9")],
    )
    .expect("valid url");
    assert_eq!(url.path(), "/v2/everything");
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), "rust & tokio".to_string()),
            ("pageSize".to_string(), "9".to_string())
        ]
    );
    assert!(ApiClient::endpoint("not a url", "/x", &[]).is_err());
}

#[tokio::test]
/// What: News requests fail fast without a key and never touch the network.
///
/// Inputs:
/// - Client built with the default (empty) key and an unroutable base URL.
///
/// Output:
/// - `FetchError::MissingApiKey`.
async fn news_requests_require_api_key() {
    let client = ApiClient::new(ApiConfig {
        news_base_url: "http://127.0.0.1:9".to_string(),
        ..ApiConfig::default()
    })
    .expect("client");
    let res = client.fetch_headlines("us", 9).await;
    assert_eq!(res, Err(FetchError::MissingApiKey));
    let res = client.fetch_articles_by_search("rust", 9).await;
    assert_eq!(res, Err(FetchError::MissingApiKey));
}

#[test]
/// What: User-facing messages for each failure class.
fn fetch_error_display_is_user_facing() {
    assert_eq!(FetchError::NoResults.to_string(), "No results found");
    assert!(
        FetchError::Network("connection refused".into())
            .to_string()
            .contains("connection refused")
    );
    assert!(FetchError::MissingApiKey.to_string().contains("news_api_key"));
}

/// What: Serve one canned HTTP response on a local port.
///
/// Inputs:
/// - `status_line`: e.g. `401 Unauthorized`.
/// - `body`: JSON body to return.
///
/// Output:
/// - Base URL of the listener; the server thread exits after one request.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut buf = [0_u8; 4096];
        let mut seen = Vec::new();
        while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => seen.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
    });
    format!("http://{addr}")
}

/// What: Base URL of a local port with nothing listening.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
/// What: A non-success status maps to `Api` with the status code and the API's message.
///
/// Inputs:
/// - Local server answering `401` with a news error envelope; a `503` for the directory.
///
/// Output:
/// - News: `Api { status: Some(401), message }` from the body.
/// - Countries: `Api { status: Some(503), .. }` with the reason phrase.
async fn non_success_status_maps_to_api_error() {
    let news_base = serve_once(
        "401 Unauthorized",
        r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#,
    );
    let client = ApiClient::new(ApiConfig {
        news_base_url: news_base,
        news_api_key: "secret-key".to_string(),
        ..ApiConfig::default()
    })
    .expect("client");
    let err = client
        .fetch_articles_by_search("rust", 3)
        .await
        .expect_err("401 answer");
    assert_eq!(
        err,
        FetchError::Api {
            status: Some(401),
            message: "Your API key is invalid.".to_string()
        }
    );

    let countries_base = serve_once("503 Service Unavailable", "{}");
    let client = ApiClient::new(ApiConfig {
        countries_base_url: countries_base,
        ..ApiConfig::default()
    })
    .expect("client");
    let err = client.fetch_countries().await.expect_err("503 answer");
    assert!(matches!(err, FetchError::Api { status: Some(503), .. }));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
/// What: A refused connection maps to `Network` without exposing the API key.
///
/// Inputs:
/// - News base URL pointing at a closed local port; key `secret-key`.
///
/// Output:
/// - `FetchError::Network` whose message mentions neither `apiKey` nor the key.
async fn refused_connection_is_network_error_without_key() {
    let client = ApiClient::new(ApiConfig {
        news_base_url: closed_port_url(),
        news_api_key: "secret-key".to_string(),
        ..ApiConfig::default()
    })
    .expect("client");
    let err = client
        .fetch_articles_by_search("x", 3)
        .await
        .expect_err("closed port");
    let FetchError::Network(message) = &err else {
        panic!("expected Network, got {err:?}");
    };
    assert!(!message.contains("apiKey"), "{message}");
    assert!(!message.contains("secret-key"), "{message}");
    assert!(!err.to_string().contains("secret-key"));
}
