use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{QueryInput, SearchCompletion};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events flow from the reader thread to the event loop.
/// - Queries flow from the form controller to the search worker; completions
///   flow back to the event loop.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end polled by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests dispatched by the form controller.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Taken by the search worker at spawn time.
    pub query_rx: Option<mpsc::UnboundedReceiver<QueryInput>>,
    /// Completions sent by request tasks.
    pub completion_tx: mpsc::UnboundedSender<SearchCompletion>,
    /// Receiving end polled by the event loop.
    pub completion_rx: mpsc::UnboundedReceiver<SearchCompletion>,
}

impl Channels {
    /// Create every channel used by the runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            query_rx: Some(query_rx),
            completion_tx,
            completion_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
