use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the input line and place the terminal cursor after the text.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input text, modal)
/// - `area`: Input rectangle
///
/// Details:
/// - The cursor is hidden while a modal is open.
pub fn render_input(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    "Search (Enter to submit, Esc to quit)",
                    Style::default().fg(th.mauve),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve)),
        );
    f.render_widget(input, area);

    if app.modal.is_open() {
        return;
    }
    let right = area.x + area.width.saturating_sub(1);
    let text_w = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
    let x = (area.x + 1 + 2).saturating_add(text_w).min(right);
    let y = area.y + 1;
    f.set_cursor_position(Position::new(x, y));
}
