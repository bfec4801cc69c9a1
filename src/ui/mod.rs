//! Rendering layer: phrase header, result table, input line and modals.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod modals;
mod results;
mod search;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (table selection is synced while drawing)
///
/// Details:
/// - Layout top to bottom: phrase header (3 rows), results (fill), input (3 rows);
///   the active modal is drawn last, on top of everything.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    results::render_phrase(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);
    search::render_input(f, app, chunks[2]);
    modals::render_modals(f, app, area);
}
