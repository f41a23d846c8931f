//! Task list rendering (filtered view with the inline edit form).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use taskboard_proto::{Task, TaskDraft};

use super::{form, theme};
use crate::app::{App, Focus};
use crate::board::FormTarget;
use crate::service::TaskService;

/// Render the filtered task list.
pub fn render<S: TaskService>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == Focus::List;
    let board = &app.board;
    let visible = board.visible();
    let editing = match board.target() {
        FormTarget::Editing { id, draft } => Some((id, draft)),
        FormTarget::Creating => None,
    };

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;
            match editing {
                Some((id, draft)) if *id == task.id => edit_item(task, draft, app),
                _ => task_item(task, is_selected, is_focused),
            }
        })
        .collect();

    let title = format!(
        "Tasks · {} ({}/{})",
        board.filter(),
        visible.len(),
        board.tasks().len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::focus()
        } else {
            theme::text()
        });

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(if visible.is_empty() {
        None
    } else {
        Some(app.selected)
    });

    frame.render_stateful_widget(list, area, &mut state);
}

/// A read-only task row.
fn task_item(task: &Task, is_selected: bool, is_focused: bool) -> ListItem<'_> {
    let checkbox = if task.done { "[✓]" } else { "[ ]" };
    let name_style = if is_selected && is_focused {
        theme::cursor_row()
    } else if is_selected {
        theme::focus()
    } else {
        theme::task_name()
    };

    let header = Line::from(vec![
        Span::styled(checkbox, theme::done_marker(task.done)),
        Span::raw(" "),
        Span::styled(task.name.as_str(), name_style),
        Span::raw("  "),
        Span::styled(
            task.priority.as_str(),
            theme::priority(&task.priority),
        ),
    ]);
    let detail = Line::from(vec![
        Span::raw("    "),
        Span::styled(task.description.as_str(), theme::hint()),
        Span::styled(format!("  #{}", task.id), theme::hint()),
    ]);

    ListItem::new(vec![header, detail])
}

/// The inline edit form shown in place of the task being edited.
fn edit_item<S: TaskService>(task: &Task, draft: &TaskDraft, app: &App<S>) -> ListItem<'static> {
    let focused_field = (app.focus == Focus::Form).then_some(app.field);
    let mut lines = vec![Line::from(vec![
        Span::styled("✎ editing ", theme::focus()),
        Span::styled(format!("#{}", task.id), theme::hint()),
    ])];
    lines.extend(form::field_lines(draft, focused_field));
    if let Some(message) = app.board.validation_message() {
        lines.push(Line::from(Span::styled(
            format!("    {message}"),
            theme::failure(),
        )));
    }
    lines.push(Line::from(Span::styled(
        "    Enter: save | Esc: cancel",
        theme::hint(),
    )));
    ListItem::new(lines)
}
