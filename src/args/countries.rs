//! Command-line country directory listing.

use newsatlas::config::Settings;
use newsatlas::logic::filter_countries;
use newsatlas::sources::ApiClient;
use newsatlas::state::Country;
use newsatlas::ui::helpers::{format_area, format_thousands};

/// What: Format one country as a single output line.
///
/// Output:
/// - `name | population | area km² | region / subregion` (subregion omitted when empty).
pub fn format_country_line(c: &Country) -> String {
    let place = if c.subregion.is_empty() {
        c.region.clone()
    } else {
        format!("{} / {}", c.region, c.subregion)
    };
    format!(
        "{} | {} | {} km² | {place}",
        c.name,
        format_thousands(c.population),
        format_area(c.area)
    )
}

/// What: Fetch the country directory, filter it by `term`, and print the matches.
///
/// Inputs:
/// - `term`: Search term; empty lists every country.
/// - `settings`: Effective settings (country endpoint and timeouts).
///
/// Output:
/// - Process exit code: `0` when at least one country matched, `1` otherwise.
pub async fn handle_countries(term: &str, settings: &Settings) -> i32 {
    tracing::info!(term = %term, "Country listing requested from CLI");
    let client = match ApiClient::new(settings.api_config()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    let all = match client.fetch_countries().await {
        Ok(all) => all,
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "Failed to fetch countries");
            return 1;
        }
    };
    let matches = filter_countries(&all, term);
    if matches.is_empty() {
        println!("No matching countries");
        return 1;
    }
    for c in &matches {
        println!("{}", format_country_line(c));
    }
    tracing::info!(count = matches.len(), "Displayed countries");
    0
}
