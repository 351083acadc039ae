//! Command-line argument definition and processing.

use clap::Parser;
use newsatlas::config::Settings;

/// newsatlas - browse world news headlines and a country directory in the terminal
#[derive(Parser, Debug)]
#[command(name = "newsatlas")]
#[command(version)]
#[command(about = "Browse world news headlines and a country directory in the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// News API key (overrides NEWSATLAS_API_KEY and settings.conf)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Two-letter country code for top headlines (e.g., us, de)
    #[arg(long)]
    pub country: Option<String>,

    /// Number of articles per request (1-100)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Print countries whose name contains TERM and exit (no TERM lists all)
    #[arg(long, value_name = "TERM", num_args = 0..=1, default_missing_value = "")]
    pub countries: Option<String>,

    /// Print top headlines and exit
    #[arg(long)]
    pub headlines: bool,

    /// Print articles matching QUERY and exit
    #[arg(long, value_name = "QUERY")]
    pub search_news: Option<String>,
}

/// What: Handle the print-and-exit modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Effective settings (CLI overrides already applied).
///
/// Output:
/// - `Some(exit_code)` when a print mode ran; `None` to continue into the TUI.
///
/// Details:
/// - At most one mode runs, checked in the order countries, headlines, search.
pub async fn process_args(args: &Args, settings: &Settings) -> Option<i32> {
    use crate::args::{countries, news};

    if let Some(term) = &args.countries {
        return Some(countries::handle_countries(term, settings).await);
    }
    if args.headlines {
        return Some(news::handle_headlines(settings).await);
    }
    if let Some(query) = &args.search_news {
        return Some(news::handle_search_news(query, settings).await);
    }
    None
}
