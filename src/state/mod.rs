//! Application state module.
//!
//! Split into small files while keeping the public API under
//! `crate::state::*` via re-exports.

pub mod app_state;
pub mod modal;
pub mod results;
pub mod types;

// Public re-exports to keep paths short
pub use app_state::AppState;
pub use modal::Modal;
pub use results::ResultView;
pub use types::{
    FormState, Notice, QueryInput, ResultItem, SearchCompletion, SearchOutcome,
};
