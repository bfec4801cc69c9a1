use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

/// Render the active modal, if any.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => render_alert(f, area, message),
    }
}

/// What: Render a centered blocking notice.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the modal
/// - `message`: Notice text
///
/// Details:
/// - Double red border on the mantle background; dismissal hint at the bottom.
pub fn render_alert(f: &mut Frame, area: Rect, message: &str) {
    let th = theme();
    let w = area.width.saturating_sub(10).min(60);
    let h = 7.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let rect = Rect {
        x,
        y,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Style::default().fg(th.subtext1),
        )),
    ];
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Notice ",
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.red))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
