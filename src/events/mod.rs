//! Event handling layer.
//!
//! Dispatches terminal events: modal dismissal first, then global exit keys,
//! then the input line.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Modal, QueryInput};

mod search;

pub use search::handle_search_key;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal captures every key until dismissed
    if let Modal::Alert { .. } = &app.modal {
        if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_modal();
        }
        return false;
    }

    if ke.code == KeyCode::Esc
        || (ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }

    handle_search_key(ke, app, query_tx);
    false
}
