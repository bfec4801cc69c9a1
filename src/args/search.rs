//! Command-line search mode: one request, rows printed to stdout.

use std::io::Write;

use crate::logic::is_valid;
use crate::sources::{SearchConfig, SearchError, submit_search};
use crate::state::{Notice, SearchOutcome};

/// Exit code for a successful search (including zero matches).
pub const EXIT_OK: i32 = 0;
/// Exit code for network failures, unexpected statuses and bad bodies.
pub const EXIT_FAILED: i32 = 1;
/// Exit code for a phrase rejected locally.
pub const EXIT_INVALID: i32 = 2;
/// Exit code for a phrase rejected by the service (HTTP 400).
pub const EXIT_REJECTED: i32 = 3;

/// What: Run one search and write the outcome.
///
/// Inputs:
/// - `phrase`: Phrase from the command line.
/// - `cfg`: Request settings.
/// - `out`: Destination for result rows.
/// - `err`: Destination for notices.
///
/// Output:
/// - Process exit code (see the `EXIT_*` constants).
///
/// Details:
/// - Rows are printed as `filename<TAB>count<TAB>proximity`, in server order.
/// - Empty phrases are treated as invalid here since there is nothing to submit.
pub async fn run_search<W: Write, E: Write>(
    phrase: &str,
    cfg: &SearchConfig,
    out: &mut W,
    err: &mut E,
) -> i32 {
    if phrase.is_empty() || !is_valid(phrase) {
        let _ = writeln!(err, "{}", Notice::InvalidInput.message());
        return EXIT_INVALID;
    }
    match submit_search(&cfg.client(), cfg, phrase).await {
        SearchOutcome::Success(items) => {
            for it in items {
                let _ = writeln!(out, "{}\t{}\t{}", it.filename, it.count, it.proximity);
            }
            EXIT_OK
        }
        SearchOutcome::Rejected => {
            let _ = writeln!(err, "{}", Notice::IncorrectData.message());
            EXIT_REJECTED
        }
        SearchOutcome::UnexpectedStatus(code) => {
            let _ = writeln!(err, "{}", Notice::UnexpectedStatus(code).message());
            EXIT_FAILED
        }
        SearchOutcome::Failed(e) => {
            let notice = match e {
                SearchError::Transport(_) => Notice::Unreachable,
                SearchError::Decode(_) => Notice::MalformedResponse,
            };
            tracing::error!(error = %e, "command-line search failed");
            let _ = writeln!(err, "{}: {e}", notice.message());
            EXIT_FAILED
        }
    }
}

/// What: Handle command-line search mode and exit.
///
/// Inputs:
/// - `phrase`: The phrase to search for.
/// - `cfg`: Request settings.
///
/// Output:
/// - Exits the process with the code from [`run_search`].
pub async fn handle_search(phrase: &str, cfg: &SearchConfig) -> ! {
    tracing::info!(phrase = %phrase, "search mode requested from CLI");
    let code = run_search(
        phrase,
        cfg,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .await;
    std::process::exit(code);
}
