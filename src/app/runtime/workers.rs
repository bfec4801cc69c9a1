use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{SearchConfig, submit_search};
use crate::state::{QueryInput, SearchCompletion};

/// What: Spawn the background worker that turns queries into HTTP requests.
///
/// Inputs:
/// - `query_rx`: Channel receiver for dispatched queries
/// - `completion_tx`: Channel sender for completions
/// - `cfg`: Endpoint, CSRF pair and timeout shared by every request
///
/// Details:
/// - Each query gets its own task, so requests overlap freely; there is no
///   debounce, deduplication or cancellation.
/// - Every request produces exactly one completion, tagged with the query id.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    completion_tx: mpsc::UnboundedSender<SearchCompletion>,
    cfg: SearchConfig,
) {
    let client = cfg.client();
    let cfg = Arc::new(cfg);
    tokio::spawn(async move {
        while let Some(q) = query_rx.recv().await {
            let client = client.clone();
            let cfg = Arc::clone(&cfg);
            let tx = completion_tx.clone();
            tokio::spawn(async move {
                let outcome = submit_search(&client, &cfg, &q.text).await;
                tracing::debug!(id = q.id, ?outcome, "search request finished");
                let _ = tx.send(SearchCompletion {
                    id: q.id,
                    phrase: q.text,
                    outcome,
                });
            });
        }
        tracing::debug!("search worker stopped");
    });
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls so the thread exits promptly
///
/// Details:
/// - Polls with a 50ms timeout; transient read errors are ignored.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
