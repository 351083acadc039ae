//! Command-line news output.

use newsatlas::config::Settings;
use newsatlas::sources::{ApiClient, NewsRequest};
use newsatlas::state::Article;

/// What: Format one article as output lines.
///
/// Output:
/// - `[source] title`, an optional indented description, then the URL.
pub fn format_article(a: &Article) -> String {
    let mut out = if a.source_name.is_empty() {
        a.title.clone()
    } else {
        format!("[{}] {}", a.source_name, a.title)
    };
    if let Some(desc) = a.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str("\n    ");
        out.push_str(desc.trim());
    }
    out.push_str("\n    ");
    out.push_str(&a.url);
    out
}

/// What: Run one news request and print the articles.
///
/// Inputs:
/// - `request`: Request to execute.
/// - `settings`: Effective settings (key, endpoint, timeouts).
///
/// Output:
/// - Process exit code: `0` on success, `1` on any fetch failure (including no results).
async fn print_request(request: NewsRequest, settings: &Settings) -> i32 {
    let client = match ApiClient::new(settings.api_config()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    match client.execute(&request).await {
        Ok(articles) => {
            for a in &articles {
                println!("{}", format_article(a));
                println!();
            }
            tracing::info!(count = articles.len(), "Displayed news articles");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "Failed to fetch news");
            1
        }
    }
}

/// What: Print top headlines for the configured country.
pub async fn handle_headlines(settings: &Settings) -> i32 {
    tracing::info!(country = %settings.news_country, "Headlines requested from CLI");
    let request = NewsRequest::TopHeadlines {
        country: settings.news_country.clone(),
        page_size: settings.news_page_size,
    };
    print_request(request, settings).await
}

/// What: Print articles matching `query`; a blank query prints top headlines.
pub async fn handle_search_news(query: &str, settings: &Settings) -> i32 {
    let query = query.trim();
    if query.is_empty() {
        return handle_headlines(settings).await;
    }
    tracing::info!(query = %query, "News search requested from CLI");
    let request = NewsRequest::Search {
        query: query.to_string(),
        page_size: settings.news_page_size,
    };
    print_request(request, settings).await
}
