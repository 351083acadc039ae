use std::fs;
use std::path::Path;

use super::parsing::parse_key_value;
use super::paths::settings_path;
use super::skeletons::SETTINGS_SKELETON_CONTENT;
use super::types::{MAX_PAGE_SIZE, Settings};
use crate::state::View;
use crate::store::StalePolicy;

/// Environment variable that overrides `news_api_key`.
pub const API_KEY_ENV: &str = "NEWSATLAS_API_KEY";

/// What: Parse settings content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are logged and ignored, keeping the previous value.
/// - `news_page_size` is clamped to `1..=100`.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "news_api_key" | "api_key" => settings.news_api_key = val.to_string(),
            "news_country" | "country" => {
                if !val.is_empty() {
                    settings.news_country = val.to_ascii_lowercase();
                }
            }
            "news_page_size" | "page_size" => {
                if let Ok(v) = val.parse::<u32>() {
                    settings.news_page_size = v.clamp(1, MAX_PAGE_SIZE);
                }
            }
            "news_base_url" => {
                if !val.is_empty() {
                    settings.news_base_url = val.to_string();
                }
            }
            "countries_base_url" => {
                if !val.is_empty() {
                    settings.countries_base_url = val.to_string();
                }
            }
            "http_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.http_timeout_secs = v.max(1);
                }
            }
            "stale_results" => {
                if let Some(p) = StalePolicy::from_config_key(val) {
                    settings.stale_results = p;
                } else {
                    tracing::warn!(value = val, "unknown stale_results value");
                }
            }
            "start_view" => {
                if let Some(v) = View::from_config_key(val) {
                    settings.start_view = v;
                }
            }
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
}

/// What: Apply environment overrides through a lookup function.
///
/// Inputs:
/// - `settings`: Settings to update.
/// - `lookup`: Environment accessor (injected so tests need not mutate the process env).
///
/// Details:
/// - A non-blank `NEWSATLAS_API_KEY` replaces the file's key.
pub fn apply_env_overrides_with(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = lookup(API_KEY_ENV)
        && !key.trim().is_empty()
    {
        settings.news_api_key = key.trim().to_string();
    }
}

/// What: Load settings from a specific file, writing the skeleton when it is missing.
///
/// Inputs:
/// - `path`: Location of `settings.conf`.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton"),
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// Load user settings from the config directory plus environment overrides.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    let path = settings_path();
    let mut out = load_settings_from(&path);
    apply_env_overrides_with(&mut out, |k| std::env::var(k).ok());
    tracing::info!(
        path = %path.display(),
        api_key_set = !out.news_api_key.is_empty(),
        country = %out.news_country,
        page_size = out.news_page_size,
        "settings loaded"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every documented key is parsed, with clamping and comment stripping.
    ///
    /// Inputs:
    /// - A settings file covering all keys, a few with inline comments and out-of-range values.
    ///
    /// Output:
    /// - Fields reflect the file; invalid values keep their defaults.
    fn parse_settings_reads_all_keys() {
        let content = "\
# comment line
news_api_key = abc123   # secret
news_country = DE
news_page_size = 500
news_base_url = http://localhost:8080
countries_base_url = http://localhost:8081 // local mirror
http_timeout_secs = 0
stale_results = last_wins
start_view = countries
mystery_key = 1
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.news_api_key, "abc123");
        assert_eq!(s.news_country, "de");
        assert_eq!(s.news_page_size, MAX_PAGE_SIZE);
        assert_eq!(s.news_base_url, "http://localhost:8080");
        assert_eq!(s.countries_base_url, "http://localhost:8081");
        assert_eq!(s.http_timeout_secs, 1);
        assert_eq!(s.stale_results, StalePolicy::LastResolvedWins);
        assert_eq!(s.start_view, View::Countries);
    }

    #[test]
    /// What: Garbage values leave defaults untouched.
    fn parse_settings_ignores_invalid_values() {
        let mut s = Settings::default();
        parse_settings(
            "news_page_size = many\nstale_results = sometimes\nstart_view = map\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: The environment key overrides the file key unless blank.
    fn env_override_replaces_api_key() {
        let mut s = Settings {
            news_api_key: "from-file".to_string(),
            ..Settings::default()
        };
        apply_env_overrides_with(&mut s, |_| Some("   ".to_string()));
        assert_eq!(s.news_api_key, "from-file");
        apply_env_overrides_with(&mut s, |k| (k == API_KEY_ENV).then(|| " env-key ".to_string()));
        assert_eq!(s.news_api_key, "env-key");
    }

    #[test]
    /// What: A missing file gets the skeleton, which parses back to the defaults.
    ///
    /// Inputs:
    /// - Path inside a fresh temporary directory.
    ///
    /// Output:
    /// - File created; loaded settings equal `Settings::default()`.
    fn load_settings_writes_skeleton_that_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.conf");
        let s = load_settings_from(&path);
        assert!(path.is_file());
        assert_eq!(s, Settings::default());
        let written = std::fs::read_to_string(&path).expect("read skeleton");
        assert!(written.contains("news_api_key ="));
    }

    #[test]
    /// What: Derived client and store parameters follow the settings.
    fn settings_derive_api_config_and_defaults() {
        let s = Settings {
            news_api_key: "k".to_string(),
            news_country: "ke".to_string(),
            news_page_size: 4,
            http_timeout_secs: 5,
            ..Settings::default()
        };
        let api = s.api_config();
        assert_eq!(api.news_api_key, "k");
        assert_eq!(api.request_timeout.as_secs(), 5);
        assert!(api.connect_timeout <= api.request_timeout);
        let d = s.news_defaults();
        assert_eq!(d.country, "ke");
        assert_eq!(d.page_size, 4);
    }
}
