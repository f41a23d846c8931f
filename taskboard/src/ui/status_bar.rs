//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Focus};
use crate::service::TaskService;

/// Render the two-line status bar: sync state and notice, then key help.
pub fn render<S: TaskService>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board = &app.board;
    let help_text = match app.focus {
        Focus::List => {
            "↑↓/jk: select | 1/2/3: all/completed/pending | e: edit | d: delete | n: new | r: reload | q: quit"
        }
        Focus::Form => "Tab: next field | Space: toggle done | Enter: submit | Esc: back",
    };

    let sync_text = board.last_synced().map_or_else(
        || "not synced".to_string(),
        |at| format!("synced {}", at.format("%H:%M:%S")),
    );

    let mut status = vec![
        Span::styled(format!("Taskboard v{}", env!("CARGO_PKG_VERSION")), theme::focus()),
        Span::raw(" | "),
        Span::styled(format!("filter: {}", board.filter()), theme::text()),
        Span::raw(" | "),
        Span::styled(sync_text, theme::hint()),
    ];
    if let Some(notice) = board.notice() {
        status.push(Span::raw(" | "));
        status.push(Span::styled(notice.to_string(), theme::failure()));
        status.push(Span::styled(" (x: dismiss)", theme::hint()));
    }

    let lines = vec![
        Line::from(status),
        Line::from(Span::styled(help_text, theme::hint())),
    ];
    let paragraph = Paragraph::new(lines).style(theme::status_line());
    frame.render_widget(paragraph, area);
}
