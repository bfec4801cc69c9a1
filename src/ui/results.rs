use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the phrase header above the result list.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (displayed phrase, pending count)
/// - `area`: Header rectangle
///
/// Details:
/// - Shows the last rendered phrase verbatim and, while requests are in flight,
///   a `searching… (N)` marker.
pub fn render_phrase(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans = vec![
        Span::styled("Search phrase: ", Style::default().fg(th.overlay1)),
        Span::styled(
            app.view.phrase().to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if app.pending > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("searching… ({})", app.pending),
            Style::default().fg(th.yellow),
        ));
    }
    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(header, area);
}

/// What: Render the result rows as three columns: filename, count, proximity.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (selection is applied to the table state)
/// - `area`: List rectangle
///
/// Details:
/// - Rows appear in the order they were added to the view.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rows: Vec<Row> = app
        .view
        .rows()
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(
                    r.filename.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    r.count.to_string(),
                    Style::default().fg(th.green),
                )),
                Cell::from(Span::styled(
                    r.proximity.to_string(),
                    Style::default().fg(th.overlay1),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec!["File", "Count", "Proximity"])
        .style(Style::default().fg(th.mauve).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .style(Style::default().fg(th.text).bg(th.base))
    .block(
        Block::default()
            .title(Span::styled(
                format!("Results ({})", app.view.len()),
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    )
    .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(app.list_state.selected());
    f.render_stateful_widget(table, area, &mut state);
}
