//! Command-line interface: argument definitions, settings overrides and the
//! one-shot search mode.

mod definition;
pub mod search;

pub use definition::{Args, apply_overrides};
