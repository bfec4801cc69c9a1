use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic::handle_completion;
use crate::sources::SearchConfig;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod workers;

use channels::Channels;
use workers::{spawn_event_thread, spawn_search_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Options resolved by the bootstrap step before the runtime starts.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Request settings shared by every search.
    pub search: SearchConfig,
    /// Stay silent on unexpected statuses and transport failures.
    pub strict_parity: bool,
}

/// What: Run the TUI end-to-end: set up the terminal, spawn the event reader and
/// search worker, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Endpoint, CSRF pair, timeout and parity mode.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Terminal events and completions are handled one at a time by a single
///   `select!`, so `AppState` is never touched concurrently.
/// - Headless mode (`PHRASEFIND_TEST_HEADLESS=1`) skips terminal setup and the
///   event reader.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("PHRASEFIND_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        strict_parity: opts.strict_parity,
        ..AppState::default()
    };
    tracing::info!(
        endpoint = %opts.search.endpoint,
        csrf = opts.search.csrf.is_some(),
        timeout = ?opts.search.timeout,
        strict_parity = opts.strict_parity,
        "runtime starting"
    );

    let mut channels = Channels::new();
    if let Some(query_rx) = channels.query_rx.take() {
        spawn_search_worker(query_rx, channels.completion_tx.clone(), opts.search);
    }
    if !headless {
        spawn_event_thread(
            channels.event_tx.clone(),
            channels.event_thread_cancelled.clone(),
        );
    }

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.query_tx) {
                    break;
                }
            }
            Some(done) = channels.completion_rx.recv() => {
                let state = handle_completion(&mut app, done);
                tracing::debug!(?state, pending = app.pending, "completion applied");
            }
            else => {}
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    tracing::info!(pending = app.pending, "runtime exiting");

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
