//! Modal dialog state.

/// What: Dialog overlay currently shown on top of the main screen.
///
/// - Input: Set by the form controller when a notice must be surfaced.
/// - Output: Drives the modal renderer and captures keys while active.
/// - Details: Only one modal can be active at a time; a new notice replaces
///   the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Blocking notice; dismissed with Enter or Esc.
    Alert {
        /// Text shown in the alert body.
        message: String,
    },
}

impl Modal {
    /// `true` while an overlay is capturing input.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
