//! phrasefind binary entrypoint kept minimal. The runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use phrasefind::app::{self, RunOptions};
use phrasefind::args::{self, Args};
use phrasefind::sources::{PageMetadata, SearchConfig};

struct PhrasefindTimer;

impl tracing_subscriber::fmt::time::FormatTime for PhrasefindTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS" (UTC)
        let ts = chrono::Utc::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/phrasefind/logs/phrasefind.log`.
///
/// Inputs:
/// - `default_level`: Filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened.
fn init_logging(default_level: &str) {
    let mut log_path = phrasefind::theme::logs_dir();
    log_path.push("phrasefind.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PhrasefindTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PhrasefindTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    let settings = args::apply_overrides(&cli, phrasefind::theme::settings());
    init_logging(&settings.log_level);
    phrasefind::theme::settings_origin().log();
    tracing::info!(?settings, "phrasefind starting");

    let meta = PageMetadata::load(settings.metadata_source.as_deref()).await;
    let search = SearchConfig::new(
        &settings.endpoint,
        &meta,
        settings.attach_csrf,
        settings.request_timeout_secs,
    );

    if let Some(phrase) = &cli.search {
        args::search::handle_search(phrase, &search).await;
    }

    let opts = RunOptions {
        search,
        strict_parity: settings.strict_parity,
    };
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("phrasefind exited");
}
