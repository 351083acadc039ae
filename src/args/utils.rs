//! Shared utilities for argument processing.

use newsatlas::config::{MAX_PAGE_SIZE, Settings};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply command-line overrides on top of file and environment settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - Blank values are ignored; the page size is clamped to `1..=100`.
pub fn apply_cli_overrides(args: &crate::args::Args, settings: &mut Settings) {
    if let Some(key) = args.api_key.as_deref().map(str::trim)
        && !key.is_empty()
    {
        settings.news_api_key = key.to_string();
    }
    if let Some(country) = args.country.as_deref().map(str::trim)
        && !country.is_empty()
    {
        settings.news_country = country.to_ascii_lowercase();
    }
    if let Some(size) = args.page_size {
        settings.news_page_size = size.clamp(1, MAX_PAGE_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    #[test]
    /// What: `--verbose` wins over `--log-level`.
    fn log_level_prefers_verbose() {
        let args = Args::parse_from(["newsatlas", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "warn");
        let args = Args::parse_from(["newsatlas", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: CLI values replace settings; blank values and oversize pages are handled.
    ///
    /// Inputs:
    /// - `--api-key K --country DE --page-size 500`, then a blank `--api-key`.
    ///
    /// Output:
    /// - Key set, country lowercased, page size clamped; blank key keeps the previous one.
    fn cli_overrides_apply_and_clamp() {
        let mut settings = Settings::default();
        let args = Args::parse_from([
            "newsatlas",
            "--api-key",
            "K",
            "--country",
            "DE",
            "--page-size",
            "500",
        ]);
        apply_cli_overrides(&args, &mut settings);
        assert_eq!(settings.news_api_key, "K");
        assert_eq!(settings.news_country, "de");
        assert_eq!(settings.news_page_size, MAX_PAGE_SIZE);

        let args = Args::parse_from(["newsatlas", "--api-key", "  "]);
        apply_cli_overrides(&args, &mut settings);
        assert_eq!(settings.news_api_key, "K");
    }

    #[test]
    /// What: `--countries` without a value lists everything.
    fn countries_flag_value_is_optional() {
        let args = Args::parse_from(["newsatlas", "--countries"]);
        assert_eq!(args.countries.as_deref(), Some(""));
        let args = Args::parse_from(["newsatlas", "--countries", "ke"]);
        assert_eq!(args.countries.as_deref(), Some("ke"));
        let args = Args::parse_from(["newsatlas"]);
        assert!(args.countries.is_none());
    }
}
