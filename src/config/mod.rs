//! Configuration and palette for newsatlas.
//!
//! Split into submodules; public re-exports keep the `crate::config::*` API stable.

/// Line-level parsing helpers for `settings.conf`.
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings loading and environment overrides.
mod settings;
/// Default settings file content.
mod skeletons;
/// Palette access.
mod store;
/// Settings and palette type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    API_KEY_ENV, apply_env_overrides_with, load_settings_from, parse_settings, settings,
};
pub use store::theme;
pub use types::{MAX_PAGE_SIZE, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
