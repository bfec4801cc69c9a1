//! Central `AppState` container.

use std::collections::VecDeque;

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::results::ResultView;
use crate::state::types::FormState;

/// Global application state shared by the event, networking, and UI layers.
///
/// Mutated only from the runtime's event loop, so no locking is needed even
/// though several requests may be in flight at once.
#[derive(Debug)]
pub struct AppState {
    /// Current text of the input line.
    pub input: String,
    /// Displayed rows and phrase label.
    pub view: ResultView,
    /// Index into `view.rows()` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Notices raised while an alert was already open, oldest first.
    pub queued_notices: VecDeque<String>,

    // Search coordination
    /// Identifier of the latest dispatched request; older completions are stale.
    pub latest_query_id: u64,
    /// Next request identifier to allocate.
    pub next_query_id: u64,
    /// Requests dispatched but not yet completed.
    pub pending: usize,
    /// Terminal state reached by the most recent completion.
    pub last_state: Option<FormState>,
    /// Stay silent on unexpected statuses and transport failures.
    pub strict_parity: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input: String::new(),
            view: ResultView::default(),
            selected: 0,
            list_state: ListState::default(),
            modal: Modal::None,
            queued_notices: VecDeque::new(),
            latest_query_id: 0,
            next_query_id: 1,
            pending: 0,
            last_state: None,
            strict_parity: false,
        }
    }
}

impl AppState {
    /// What: Move the highlighted row by `delta`, clamped to the list.
    ///
    /// Inputs:
    /// - `delta`: Signed step (negative moves up).
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.view.len();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        let max = len - 1;
        let next = self.selected.saturating_add_signed(delta).min(max);
        self.selected = next;
        self.list_state.select(Some(next));
    }

    /// What: Show a notice, or queue it behind the alert already on screen.
    ///
    /// Inputs:
    /// - `message`: Alert text.
    pub fn push_notice(&mut self, message: String) {
        if self.modal.is_open() {
            self.queued_notices.push_back(message);
        } else {
            self.modal = Modal::Alert { message };
        }
    }

    /// Close the current alert and show the next queued notice, if any.
    pub fn dismiss_modal(&mut self) {
        self.modal = self
            .queued_notices
            .pop_front()
            .map_or(Modal::None, |message| Modal::Alert { message });
    }

    /// Reset selection to the first row after the view was replaced.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        if !self.view.is_empty() {
            self.list_state.select(Some(0));
        }
    }
}
