//! Client-side task state machine.
//!
//! The [`TaskBoard`] owns the task collection mirrored from the remote
//! service, the active [`Filter`](taskboard_proto::Filter), the single edit
//! slot and the create draft. Delete patches the local collection directly;
//! create and edit-save re-fetch the full list from the service.

pub mod controller;

pub use controller::{FormTarget, TaskBoard};

use taskboard_proto::{TaskField, TaskId};
use thiserror::Error;

/// Client-side precondition failures. Remote failures never surface here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Required draft fields are empty; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// `save_edit` was called with no task bound to the edit slot.
    #[error("no task is being edited")]
    NoActiveEdit,
    /// The id is not in the current collection.
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),
}

/// Required fields left empty in a draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    /// Empty required fields, in form order.
    pub missing: Vec<TaskField>,
}

fn join_fields(fields: &[TaskField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Remote mutation kinds, for labelling notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Creating a task.
    Create,
    /// Saving an edit.
    Update,
    /// Deleting a task.
    Delete,
}

impl std::fmt::Display for BoardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "save"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A failed remote mutation shown to the user until dismissed or until the
/// next mutation succeeds. Local state is left as it was, so the user can
/// retry the same action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What was being attempted.
    pub action: BoardAction,
    /// Error text from the service layer.
    pub message: String,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not {}: {} (retry when ready)", self.action, self.message)
    }
}

/// Remote-bound operations a front end asks the board to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Re-fetch the task list.
    Load,
    /// Submit the create draft.
    Create,
    /// Submit the bound edit draft.
    SaveEdit,
    /// Delete the given task.
    Delete(TaskId),
}
