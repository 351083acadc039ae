//! News API fetching and decoding (top headlines and free-text search).

use serde::Deserialize;
use tracing::info;

use super::{ApiClient, FetchError, Result};
use crate::state::Article;

/// Title the news API substitutes for articles withdrawn by the publisher.
const REMOVED_MARKER: &str = "[Removed]";

/// What: A single news request, independent of credentials and endpoints.
///
/// Details:
/// - Produced by the store on dispatch and executed by a worker, so the
///   store never performs I/O itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsRequest {
    /// `/v2/top-headlines` for a country.
    TopHeadlines {
        /// ISO 3166-1 alpha-2 country code (e.g., `us`).
        country: String,
        /// Maximum number of articles.
        page_size: u32,
    },
    /// `/v2/everything` for a query.
    Search {
        /// Free-text query, already trimmed.
        query: String,
        /// Maximum number of articles.
        page_size: u32,
    },
}

/// Raw publisher object.
#[derive(Deserialize)]
struct RawSource {
    /// Publisher display name.
    name: Option<String>,
}

/// Raw article record; every field is optional in practice.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    /// Article URL.
    url: Option<String>,
    /// Headline.
    title: Option<String>,
    /// Teaser.
    description: Option<String>,
    /// Lead image.
    url_to_image: Option<String>,
    /// Publisher.
    source: Option<RawSource>,
}

/// Response envelope shared by both endpoints.
#[derive(Deserialize)]
struct RawEnvelope {
    /// `"ok"` or `"error"`.
    #[serde(default)]
    status: String,
    /// Error message when `status == "error"`.
    message: Option<String>,
    /// Articles when `status == "ok"`.
    articles: Option<Vec<RawArticle>>,
}

/// What: Convert a raw record into an `Article`, dropping unusable entries.
///
/// Output:
/// - `None` for records without URL or title, and for withdrawn articles.
fn to_article(raw: RawArticle) -> Option<Article> {
    let url = raw.url.filter(|u| !u.trim().is_empty())?;
    let title = raw.title.filter(|t| t != REMOVED_MARKER)?;
    Some(Article {
        url,
        title,
        description: raw.description.filter(|d| !d.trim().is_empty()),
        image_url: raw.url_to_image.filter(|u| !u.trim().is_empty()),
        source_name: raw.source.and_then(|s| s.name).unwrap_or_default(),
    })
}

/// What: Decode a news API payload into `Article` values.
///
/// Inputs:
/// - `body`: JSON text of a `/v2/top-headlines` or `/v2/everything` response.
///
/// Output:
/// - `Ok(Vec<Article>)` in payload order, withdrawn entries removed.
///
/// # Errors
/// - `FetchError::Api` when the envelope reports `status: "error"`.
/// - `FetchError::Decode` when the body is not a news envelope.
/// - `FetchError::NoResults` when no usable article remains.
pub fn parse_articles(body: &str) -> Result<Vec<Article>> {
    let env: RawEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if env.status == "error" {
        return Err(FetchError::Api {
            status: None,
            message: env
                .message
                .unwrap_or_else(|| "Failed to fetch news".to_string()),
        });
    }
    let Some(raw) = env.articles else {
        return Err(FetchError::Decode("missing `articles`".to_string()));
    };
    let articles: Vec<Article> = raw.into_iter().filter_map(to_article).collect();
    if articles.is_empty() {
        return Err(FetchError::NoResults);
    }
    Ok(articles)
}

/// What: Map a non-success HTTP answer to `FetchError::Api`.
///
/// Details:
/// - Prefers the API's own `message` (e.g., "Your API key is invalid") over the reason phrase.
fn status_error(status: reqwest::StatusCode, body: &str) -> FetchError {
    let message = serde_json::from_str::<RawEnvelope>(body)
        .ok()
        .and_then(|env| env.message)
        .unwrap_or_else(|| {
            format!(
                "News API returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("error")
            )
        });
    FetchError::Api {
        status: Some(status.as_u16()),
        message,
    }
}

impl ApiClient {
    /// What: Fetch top headlines for a country.
    ///
    /// Inputs:
    /// - `country_code`: ISO alpha-2 code, e.g. `us`.
    /// - `page_size`: Maximum number of articles.
    ///
    /// Output:
    /// - `Ok(Vec<Article>)`.
    ///
    /// # Errors
    /// - See [`FetchError`]; `MissingApiKey` when no key is configured.
    pub async fn fetch_headlines(&self, country_code: &str, page_size: u32) -> Result<Vec<Article>> {
        self.execute(&NewsRequest::TopHeadlines {
            country: country_code.to_string(),
            page_size,
        })
        .await
    }

    /// What: Search all articles for a free-text query.
    ///
    /// Inputs:
    /// - `query`: Search terms.
    /// - `page_size`: Maximum number of articles.
    ///
    /// Output:
    /// - `Ok(Vec<Article>)`.
    ///
    /// # Errors
    /// - See [`FetchError`]; `MissingApiKey` when no key is configured.
    pub async fn fetch_articles_by_search(&self, query: &str, page_size: u32) -> Result<Vec<Article>> {
        self.execute(&NewsRequest::Search {
            query: query.to_string(),
            page_size,
        })
        .await
    }

    /// What: Execute a prepared news request.
    ///
    /// Inputs:
    /// - `request`: Endpoint selection plus parameters.
    ///
    /// Output:
    /// - Decoded articles or a classified failure.
    ///
    /// # Errors
    /// - `MissingApiKey`, `Network`, `Api`, `Decode`, or `NoResults`.
    pub async fn execute(&self, request: &NewsRequest) -> Result<Vec<Article>> {
        let key = self.config.news_api_key.trim();
        if key.is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        let url = match request {
            NewsRequest::TopHeadlines { country, page_size } => {
                let size = page_size.to_string();
                Self::endpoint(
                    &self.config.news_base_url,
                    "/v2/top-headlines",
                    &[
                        ("apiKey", key),
                        ("country", country.as_str()),
                        ("pageSize", size.as_str()),
                    ],
                )?
            }
            NewsRequest::Search { query, page_size } => {
                let size = page_size.to_string();
                Self::endpoint(
                    &self.config.news_base_url,
                    "/v2/everything",
                    &[
                        ("apiKey", key),
                        ("q", query.as_str()),
                        ("pageSize", size.as_str()),
                    ],
                )?
            }
        };
        let (status, body) = self.get_text(url).await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        let articles = parse_articles(&body)?;
        info!(count = articles.len(), ?request, "fetched news");
        Ok(articles)
    }
}
