//! Terminal UI rendering.

pub mod form;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::service::TaskService;

/// Main draw function for the entire UI.
pub fn draw<S: TaskService>(frame: &mut Frame, app: &App<S>) {
    // Create main layout with status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(frame.area());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Tasks
            Constraint::Percentage(35), // Create form
        ])
        .split(main_chunks[0]);

    task_list::render(frame, content_chunks[0], app);
    form::render(frame, content_chunks[1], app);
    status_bar::render(frame, main_chunks[1], app);
}
