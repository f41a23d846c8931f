//! Styles for the task board, named by what they mark.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::Gray;

/// Plain body text.
#[must_use]
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Descriptions, ids and key hints.
#[must_use]
pub fn hint() -> Style {
    Style::default().fg(MUTED)
}

/// Task names.
#[must_use]
pub fn task_name() -> Style {
    text().add_modifier(Modifier::BOLD)
}

/// Focused panel border, focused form field and the edit marker.
#[must_use]
pub fn focus() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// The selected row of the focused list.
#[must_use]
pub fn cursor_row() -> Style {
    focus().fg(Color::Black).bg(ACCENT)
}

/// Validation messages and failure notices.
#[must_use]
pub fn failure() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Background of the bottom status lines.
#[must_use]
pub fn status_line() -> Style {
    text().bg(Color::Rgb(30, 30, 50))
}

/// Completion checkbox: green once done, yellow while pending.
#[must_use]
pub fn done_marker(done: bool) -> Style {
    Style::default().fg(if done { Color::Green } else { Color::Yellow })
}

/// Priority label. Matching ignores case and surrounding blanks; labels
/// other than high/medium/low stay muted.
#[must_use]
pub fn priority(label: &str) -> Style {
    let color = match label.trim().to_ascii_lowercase().as_str() {
        "high" => Color::LightRed,
        "medium" => Color::LightYellow,
        "low" => Color::LightGreen,
        _ => MUTED,
    };
    Style::default().fg(color)
}
