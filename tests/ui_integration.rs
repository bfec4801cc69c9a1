//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These render full frames from hand-built `AppState` values and inspect the
//! resulting buffer text.

use ratatui::{Terminal, backend::TestBackend};

use phrasefind::state::{AppState, Modal, ResultItem};
use phrasefind::ui;

/// Create a `TestBackend` terminal with the given dimensions.
fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Flatten the rendered buffer into one line of text per row.
fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
/// What: Initial frame shows an empty header, an empty table and the input hint.
///
/// Inputs:
/// - Default `AppState` on an 80x20 terminal.
///
/// Output:
/// - `Results (0)` title and the input block title are visible.
fn ui_renders_initial_state() {
    let mut terminal = create_test_terminal(80, 20);
    let mut app = AppState::default();

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");

    let text = buffer_lines(&terminal).join("\n");
    assert!(text.contains("Search phrase:"));
    assert!(text.contains("Results (0)"));
    assert!(text.contains("Search (Enter to submit, Esc to quit)"));
}

#[test]
/// What: Rendered rows and phrase appear in server order.
///
/// Inputs:
/// - View rendered for `report bug` with two rows.
///
/// Output:
/// - Phrase label, both filenames and the counts are visible; `b.go` precedes `a.go`.
fn ui_renders_phrase_and_rows() {
    let mut terminal = create_test_terminal(80, 20);
    let mut app = AppState::default();
    app.view.render(
        "report bug",
        vec![
            ResultItem::new("b.go", 1, 2.0),
            ResultItem::new("a.go", 3, 0.5),
        ],
    );

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");

    let lines = buffer_lines(&terminal);
    let text = lines.join("\n");
    assert!(text.contains("Search phrase: report bug"));
    assert!(text.contains("Results (2)"));
    assert!(text.contains("0.5"));
    let b_row = lines.iter().position(|l| l.contains("b.go")).expect("b.go row");
    let a_row = lines.iter().position(|l| l.contains("a.go")).expect("a.go row");
    assert!(b_row < a_row);
}

#[test]
/// What: Phrase label is shown verbatim, without interpretation.
fn ui_renders_markup_like_phrase_verbatim() {
    let mut terminal = create_test_terminal(80, 20);
    let mut app = AppState::default();
    app.view.render("<b>x</b>", Vec::new());

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");

    assert!(buffer_lines(&terminal).join("\n").contains("<b>x</b>"));
}

#[test]
/// What: In-flight requests show the pending marker.
fn ui_renders_pending_indicator() {
    let mut terminal = create_test_terminal(80, 20);
    let mut app = AppState {
        pending: 2,
        ..AppState::default()
    };

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");

    assert!(buffer_lines(&terminal).join("\n").contains("searching… (2)"));
}

#[test]
/// What: Alert modal draws its message on top of the layout.
///
/// Inputs:
/// - `Modal::Alert` with the validation notice.
///
/// Output:
/// - Notice title, message and dismissal hint are visible.
fn ui_renders_alert_modal() {
    let mut terminal = create_test_terminal(80, 20);
    let mut app = AppState {
        modal: Modal::Alert {
            message: "Input data is not valid".into(),
        },
        ..AppState::default()
    };

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");

    let text = buffer_lines(&terminal).join("\n");
    assert!(text.contains("Notice"));
    assert!(text.contains("Input data is not valid"));
    assert!(text.contains("Press Enter or Esc to close"));
}

#[test]
/// What: Very small terminals do not panic.
fn ui_handles_tiny_terminal() {
    let mut terminal = create_test_terminal(10, 4);
    let mut app = AppState {
        modal: Modal::Alert {
            message: "Incorrect data".into(),
        },
        ..AppState::default()
    };
    app.view.render("x", vec![ResultItem::new("a.go", 1, 1.0)]);

    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw");
}
