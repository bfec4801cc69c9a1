use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::handle_commit;
use crate::state::{AppState, QueryInput};

/// What: Handle key events on the input line and result list.
///
/// Inputs:
/// - `ke`: Key event received from the terminal
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the search worker
///
/// Details:
/// - Enter is the only key that submits; typing and Backspace only edit.
/// - Up/Down and PageUp/PageDown move the highlighted row.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    match ke.code {
        KeyCode::Enter => {
            let action = handle_commit(app, query_tx);
            tracing::trace!(?action, "commit handled");
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(ch);
        }
        _ => {}
    }
}
