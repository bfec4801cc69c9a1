//! Result view: the displayed match rows plus the active phrase label.

use crate::state::types::ResultItem;

/// Displayed result list and phrase label.
///
/// All mutation goes through this type so the rows and the label never
/// disagree: [`ResultView::render`] swaps both in one call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultView {
    /// Rows in the order they were added.
    rows: Vec<ResultItem>,
    /// Phrase shown above the list, verbatim.
    phrase: String,
}

impl ResultView {
    /// Drop every row. Calling it on an empty view is a no-op.
    pub fn redraw(&mut self) {
        self.rows.clear();
    }

    /// Alias of [`ResultView::redraw`].
    pub fn clear(&mut self) {
        self.redraw();
    }

    /// What: Append one row after the existing ones.
    ///
    /// Inputs:
    /// - `filename`, `count`, `proximity`: Row values.
    ///
    /// Details:
    /// - No sorting, filtering or deduplication is applied.
    pub fn add_item(&mut self, filename: impl Into<String>, count: i64, proximity: f64) {
        self.rows.push(ResultItem::new(filename, count, proximity));
    }

    /// Replace the phrase label with `phrase`, byte for byte.
    pub fn add_search_phrase(&mut self, phrase: &str) {
        phrase.clone_into(&mut self.phrase);
    }

    /// What: Replace the whole view with a fresh response.
    ///
    /// Inputs:
    /// - `phrase`: Submitted phrase to display.
    /// - `items`: Decoded response in server order.
    ///
    /// Details:
    /// - Equivalent to `redraw`, `add_search_phrase`, then `add_item` per entry.
    pub fn render(&mut self, phrase: &str, items: Vec<ResultItem>) {
        self.redraw();
        self.add_search_phrase(phrase);
        for it in items {
            self.add_item(it.filename, it.count, it.proximity);
        }
    }

    /// Rows currently displayed.
    #[must_use]
    pub fn rows(&self) -> &[ResultItem] {
        &self.rows
    }

    /// Phrase currently displayed.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of displayed rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when no rows are displayed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
