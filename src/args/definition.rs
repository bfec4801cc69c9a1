//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::Settings;

/// phrasefind - validate a search phrase, post it to a search service and browse the matches
#[derive(Parser, Debug, Default)]
#[command(name = "phrasefind")]
#[command(version)]
#[command(about = "Validate a search phrase, post it to a search service and browse the matches", long_about = None)]
pub struct Args {
    /// Search endpoint URL (overrides `endpoint` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Page URL or HTML file carrying the CSRF <meta> tags
    #[arg(long)]
    pub page: Option<String>,

    /// Request timeout in seconds (0 waits forever)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Never attach the CSRF header to search requests
    #[arg(long)]
    pub no_csrf: bool,

    /// Do not report unexpected statuses or network failures
    #[arg(long)]
    pub strict_parity: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run a single search, print the matches and exit (no TUI)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// What: Layer command-line overrides on top of file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from `settings.conf`.
///
/// Output:
/// - Effective settings for this run.
///
/// Details:
/// - `--verbose` wins over `--log-level`; flags only ever tighten booleans
///   (`--no-csrf` disables, `--strict-parity` enables).
#[must_use]
pub fn apply_overrides(args: &Args, mut settings: Settings) -> Settings {
    if let Some(ep) = args.endpoint.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        settings.endpoint = ep.to_string();
    }
    if let Some(page) = &args.page {
        settings.metadata_source = Some(page.clone());
    }
    if let Some(t) = args.timeout {
        settings.request_timeout_secs = t;
    }
    if args.no_csrf {
        settings.attach_csrf = false;
    }
    if args.strict_parity {
        settings.strict_parity = true;
    }
    if args.verbose {
        settings.log_level = "debug".to_string();
    } else if let Some(level) = &args.log_level {
        settings.log_level = level.to_ascii_lowercase();
    }
    settings
}
