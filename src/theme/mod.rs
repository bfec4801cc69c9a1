//! Configuration and palette for phrasefind.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API
//! stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings parsing and access.
mod settings;
/// Theme palette.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    SETTINGS_SKELETON_CONTENT, SettingsOrigin, load_settings_from, parse_settings, settings,
    settings_origin,
};
pub use store::theme;
pub use types::{Settings, Theme};

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
