//! `settings.conf` parsing and the process-wide settings store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::theme::parsing::{parse_bool, strip_inline_comment};
use crate::theme::paths::{config_dir, resolve_settings_config_path};
use crate::theme::types::Settings;

/// Commented skeleton written when no settings file exists yet.
pub const SETTINGS_SKELETON_CONTENT: &str = "# phrasefind settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# URL the search phrase is posted to (form field `search`).\n\
endpoint = http://localhost:80/api\n\
#\n\
# Page (http(s) URL or local HTML file) whose <meta name=\"_csrf\"> and\n\
# <meta name=\"_csrf_header\"> tags carry the CSRF token and header name.\n\
# metadata_source = http://localhost:80/\n\
#\n\
# Send `<csrf_header>: <csrf_token>` with every search when both are known.\n\
attach_csrf = true\n\
#\n\
# Whole-request timeout in seconds (0 = wait forever).\n\
request_timeout_secs = 30\n\
#\n\
# When true, unexpected statuses and network failures are not reported.\n\
strict_parity = false\n\
#\n\
# Log level used when RUST_LOG is not set (trace, debug, info, warn, error).\n\
log_level = info\n";

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File contents.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Invalid values leave the current value in place; unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "endpoint" | "search_endpoint" => {
                if !val.is_empty() {
                    settings.endpoint = val.to_string();
                }
            }
            "metadata_source" | "page" | "page_url" => {
                settings.metadata_source = (!val.is_empty()).then(|| val.to_string());
            }
            "attach_csrf" => settings.attach_csrf = parse_bool(val),
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "strict_parity" => settings.strict_parity = parse_bool(val),
            "log_level" => {
                if !val.is_empty() {
                    settings.log_level = val.to_ascii_lowercase();
                }
            }
            _ => {}
        }
    }
}

/// Where the active settings came from.
///
/// Recorded while loading; [`SettingsOrigin::log`] reports it after the tracing
/// subscriber is installed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed from this file.
    File(PathBuf),
    /// This file exists but could not be read; defaults are in effect.
    Unreadable {
        /// Settings file path.
        path: PathBuf,
        /// Read error text.
        error: String,
    },
    /// No file was found; the commented skeleton was written here.
    SkeletonWritten(PathBuf),
    /// No file was found and none could be written.
    Defaults,
}

impl SettingsOrigin {
    /// Emit one log event describing this origin.
    pub fn log(&self) {
        match self {
            Self::File(path) => tracing::info!(path = %path.display(), "loaded settings"),
            Self::Unreadable { path, error } => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to read settings; using defaults"
                );
            }
            Self::SkeletonWritten(path) => {
                tracing::info!(path = %path.display(), "wrote default settings skeleton");
            }
            Self::Defaults => tracing::info!("no settings file; using defaults"),
        }
    }
}

static SETTINGS: OnceLock<(Settings, SettingsOrigin)> = OnceLock::new();

/// What: Read settings from a specific file.
///
/// Inputs:
/// - `path`: Settings file.
///
/// Output:
/// - Parsed settings.
///
/// # Errors
/// - Returns the I/O error when the file cannot be read.
pub fn load_settings_from(path: &Path) -> io::Result<Settings> {
    let content = fs::read_to_string(path)?;
    let mut out = Settings::default();
    parse_settings(&content, &mut out);
    Ok(out)
}

/// What: Load settings from `found`, or write the skeleton to `target`.
///
/// Inputs:
/// - `found`: Existing settings file, if any.
/// - `target`: Where the skeleton goes when nothing was found.
///
/// Output:
/// - Effective settings and where they came from. Nothing is logged here.
fn load_or_seed(found: Option<PathBuf>, target: &Path) -> (Settings, SettingsOrigin) {
    if let Some(path) = found {
        return match load_settings_from(&path) {
            Ok(s) => (s, SettingsOrigin::File(path)),
            Err(e) => (
                Settings::default(),
                SettingsOrigin::Unreadable {
                    path,
                    error: e.to_string(),
                },
            ),
        };
    }
    if !target.exists() && fs::write(target, SETTINGS_SKELETON_CONTENT).is_ok() {
        return (
            Settings::default(),
            SettingsOrigin::SkeletonWritten(target.to_path_buf()),
        );
    }
    (Settings::default(), SettingsOrigin::Defaults)
}

/// Load settings from disk, writing the skeleton on first run.
fn load_initial_settings() -> (Settings, SettingsOrigin) {
    load_or_seed(
        resolve_settings_config_path(),
        &config_dir().join("settings.conf"),
    )
}

/// What: Return the process-wide settings, loading them on first use.
///
/// Output:
/// - Clone of the cached `Settings`; defaults when no file exists.
#[must_use]
pub fn settings() -> Settings {
    SETTINGS.get_or_init(load_initial_settings).0.clone()
}

/// Where the process-wide settings came from (loads them on first use).
#[must_use]
pub fn settings_origin() -> SettingsOrigin {
    SETTINGS.get_or_init(load_initial_settings).1.clone()
}
