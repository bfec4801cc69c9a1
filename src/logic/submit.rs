//! Form controller: commit handling on the input line and completion handling
//! for the requests it dispatches.

use tokio::sync::mpsc;

use crate::logic::validate::is_valid;
use crate::state::{AppState, FormState, Notice, QueryInput, SearchCompletion, SearchOutcome};
use crate::sources::SearchError;

/// Result of pressing the commit key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Input was empty; nothing happened.
    Nothing,
    /// Phrase failed validation; a notice is shown and no request was sent.
    Invalid,
    /// Request dispatched with this id.
    Dispatched(u64),
    /// The search worker is gone; nothing was sent and no id was used.
    WorkerUnavailable,
}

/// What: Raise a blocking notice.
///
/// Inputs:
/// - `app`: Application state receiving the notice.
/// - `notice`: Kind of notice to show.
///
/// Details:
/// - Queued behind an alert that is already open, so none are lost.
fn raise(app: &mut AppState, notice: Notice) {
    tracing::info!(?notice, queued = app.modal.is_open(), "notice raised");
    app.push_notice(notice.message());
}

/// What: Handle the commit key on the input line.
///
/// Inputs:
/// - `app`: Mutable application state; `input` is consumed.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - [`SubmitAction`] describing what happened.
///
/// Details:
/// - Empty input is a no-op: no validation, no notice, no request.
/// - Non-empty input is captured and the input line cleared before anything else,
///   whatever the outcome.
/// - Invalid phrases raise "Input data is not valid".
/// - Valid phrases get a fresh id that becomes `latest_query_id`; earlier
///   requests stay in flight but their completions will be discarded.
/// - The id is consumed only after the worker accepts the query.
pub fn handle_commit(
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> SubmitAction {
    if app.input.is_empty() {
        return SubmitAction::Nothing;
    }
    let text = std::mem::take(&mut app.input);
    if !is_valid(&text) {
        tracing::debug!(phrase = %text, "phrase rejected by validator");
        raise(app, Notice::InvalidInput);
        return SubmitAction::Invalid;
    }
    let id = app.next_query_id;
    tracing::debug!(id, phrase = %text, "handing query to search worker");
    if query_tx.send(QueryInput { id, text }).is_err() {
        tracing::error!(id, "search worker is gone; request dropped");
        if !app.strict_parity {
            raise(app, Notice::Unreachable);
        }
        return SubmitAction::WorkerUnavailable;
    }
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.pending += 1;
    tracing::info!(id, pending = app.pending, "search dispatched");
    SubmitAction::Dispatched(id)
}

/// What: Apply a finished request to the view.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `completion`: Reply tagged with its request id and phrase.
///
/// Output:
/// - Terminal [`FormState`] reached; also stored in `app.last_state`.
///
/// Details:
/// - Completions older than `latest_query_id` are dropped silently.
/// - 200 renders phrase and rows together; 400 raises "Incorrect data".
/// - Other statuses, transport failures and undecodable bodies leave the view
///   untouched and raise a notice unless `strict_parity` is set.
pub fn handle_completion(app: &mut AppState, completion: SearchCompletion) -> FormState {
    app.pending = app.pending.saturating_sub(1);
    let SearchCompletion {
        id,
        phrase,
        outcome,
    } = completion;
    if id != app.latest_query_id {
        tracing::debug!(id, latest = app.latest_query_id, "discarding stale completion");
        app.last_state = Some(FormState::Stale);
        return FormState::Stale;
    }
    let state = match outcome {
        SearchOutcome::Success(items) => {
            tracing::info!(id, phrase = %phrase, rows = items.len(), "search succeeded");
            app.view.render(&phrase, items);
            app.reset_selection();
            FormState::Success
        }
        SearchOutcome::Rejected => {
            tracing::warn!(id, phrase = %phrase, "search rejected by service");
            raise(app, Notice::IncorrectData);
            FormState::ClientError
        }
        SearchOutcome::UnexpectedStatus(code) => {
            tracing::warn!(id, status = code, "unexpected search status");
            if !app.strict_parity {
                raise(app, Notice::UnexpectedStatus(code));
            }
            FormState::Rejected
        }
        SearchOutcome::Failed(err) => {
            tracing::error!(id, error = %err, "search request failed");
            if !app.strict_parity {
                let notice = match err {
                    SearchError::Transport(_) => Notice::Unreachable,
                    SearchError::Decode(_) => Notice::MalformedResponse,
                };
                raise(app, notice);
            }
            FormState::Rejected
        }
    };
    app.last_state = Some(state);
    state
}
