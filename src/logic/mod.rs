//! Core client logic: phrase validation and the form controller.

pub mod submit;
pub mod validate;

pub use submit::{SubmitAction, handle_commit, handle_completion};
pub use validate::is_valid;
