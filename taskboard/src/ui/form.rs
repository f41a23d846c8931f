//! Create form rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use taskboard_proto::{TaskDraft, TaskField};

use super::theme;
use crate::app::{App, Focus};
use crate::board::FormTarget;
use crate::service::TaskService;

/// Render the create form bound to the create draft.
pub fn render<S: TaskService>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board = &app.board;
    let is_creating = *board.target() == FormTarget::Creating;
    let is_focused = app.focus == Focus::Form && is_creating;
    let focused_field = is_focused.then_some(app.field);

    let mut lines = field_lines(board.create_draft(), focused_field);
    lines.push(Line::default());
    if is_creating && let Some(message) = board.validation_message() {
        lines.push(Line::from(Span::styled(message.to_string(), theme::failure())));
    }
    lines.push(Line::from(Span::styled(
        if is_focused {
            "Enter: create | Tab: next field | Esc: back"
        } else {
            "n: new task"
        },
        theme::hint(),
    )));

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::focus()
        } else {
            theme::text()
        });

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One line per editable field, with a cursor on the focused one.
pub fn field_lines(draft: &TaskDraft, focused: Option<TaskField>) -> Vec<Line<'static>> {
    TaskField::ALL
        .into_iter()
        .map(|field| {
            let is_focused = focused == Some(field);
            let value = draft.text(field).map_or_else(
                || if draft.done { "[✓] completed" } else { "[ ] pending" }.to_string(),
                ToString::to_string,
            );
            let mut display = value;
            if is_focused && field != TaskField::Done {
                display.push('█');
            }
            Line::from(vec![
                Span::styled(
                    format!("{:>12}: ", field.label()),
                    if is_focused {
                        theme::focus()
                    } else {
                        theme::hint()
                    },
                ),
                Span::styled(display, theme::text()),
            ])
        })
        .collect()
}
