//! Application state and event handling.
//!
//! [`App`] wraps a [`TaskBoard`] with the UI-only state a terminal front end
//! needs (focus, selection, focused form field). Key handling applies local
//! board operations immediately and hands remote-bound ones back to the
//! caller as a [`BoardCommand`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_proto::{FieldUpdate, Filter, TaskField, TaskId};

use crate::board::{BoardCommand, FormTarget, TaskBoard};
use crate::service::TaskService;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The task list (default).
    List,
    /// The create form, or the inline edit form while editing.
    Form,
}

/// Main application state.
pub struct App<S> {
    /// The task state machine.
    pub board: TaskBoard<S>,
    /// Which panel is focused.
    pub focus: Focus,
    /// Selected row in the filtered view.
    pub selected: usize,
    /// Focused form field.
    pub field: TaskField,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: TaskService> App<S> {
    /// Create an application around `board`.
    #[must_use]
    pub const fn new(board: TaskBoard<S>) -> Self {
        Self {
            board,
            focus: Focus::List,
            selected: 0,
            field: TaskField::Name,
            should_quit: false,
        }
    }

    /// Id of the selected task in the filtered view.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.board
            .visible()
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    /// Handle a key event.
    ///
    /// Returns `Some(BoardCommand)` when the key asks for a remote call;
    /// pass it to [`run_command`](Self::run_command).
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<BoardCommand> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match self.focus {
            Focus::List => self.handle_list_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    /// Run a remote-bound command and settle focus and selection afterwards.
    pub async fn run_command(&mut self, command: BoardCommand) {
        let was_editing = self.board.editing_id().is_some();
        if let Err(e) = self.board.dispatch(command).await {
            tracing::debug!(error = %e, "command rejected");
        }
        if was_editing && self.board.editing_id().is_none() && self.focus == Focus::Form {
            self.focus = Focus::List;
        }
        self.clamp_selection();
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<BoardCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.board.visible().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('1' | 'a') => self.set_filter(Filter::All),
            KeyCode::Char('2' | 'c') => self.set_filter(Filter::Completed),
            KeyCode::Char('3' | 'p') => self.set_filter(Filter::Pending),
            KeyCode::Char('e') | KeyCode::Enter => {
                let id = self.selected_id()?;
                if self.board.begin_edit(&id).is_ok() {
                    self.focus = Focus::Form;
                    self.field = TaskField::Name;
                }
            }
            KeyCode::Char('n') => {
                self.board.cancel_edit();
                self.focus = Focus::Form;
                self.field = TaskField::Name;
            }
            KeyCode::Char('d') => return self.selected_id().map(BoardCommand::Delete),
            KeyCode::Char('r') => return Some(BoardCommand::Load),
            KeyCode::Char('x') => self.board.dismiss_notice(),
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<BoardCommand> {
        match key.code {
            KeyCode::Esc => {
                self.board.cancel_edit();
                self.focus = Focus::List;
            }
            KeyCode::Enter => {
                return Some(match self.board.target() {
                    FormTarget::Creating => BoardCommand::Create,
                    FormTarget::Editing { .. } => BoardCommand::SaveEdit,
                });
            }
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Char(' ') if self.field == TaskField::Done => {
                let done = self.board.active_draft().done;
                self.board.update_draft_field(FieldUpdate::Done(!done));
            }
            KeyCode::Char(c) => self.edit_text(|s| s.push(c)),
            KeyCode::Backspace => self.edit_text(|s| {
                s.pop();
            }),
            _ => {}
        }
        None
    }

    /// Apply `edit` to the focused text field of the active draft.
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(current) = self.board.active_draft().text(self.field) else {
            return;
        };
        let mut value = current.to_string();
        edit(&mut value);
        let update = match self.field {
            TaskField::Name => FieldUpdate::Name(value),
            TaskField::Description => FieldUpdate::Description(value),
            TaskField::Priority => FieldUpdate::Priority(value),
            TaskField::Done => return,
        };
        self.board.update_draft_field(update);
    }

    fn set_filter(&mut self, filter: Filter) {
        self.board.set_filter(filter);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.board.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
