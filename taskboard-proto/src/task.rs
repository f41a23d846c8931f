//! Task records and drafts as exchanged with the remote task service.
//!
//! Field names on the wire are dictated by the service (`_id`, `nombre`,
//! `descripcion`, `estado`, `prioridad`); the Rust side uses English names
//! and maps them with serde renames.

use serde::{Deserialize, Serialize};

/// Opaque task identifier assigned by the remote service.
///
/// Never generated client-side; the only way to obtain one is from a
/// list/create/update response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an identifier string returned by the service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Service-assigned identifier, immutable once created.
    #[serde(rename = "_id")]
    pub id: TaskId,
    /// Short task name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Longer free-text description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Completion flag. Missing on the wire means not done.
    #[serde(rename = "estado", default)]
    pub done: bool,
    /// Free-form priority label (e.g. "low", "high").
    #[serde(rename = "prioridad")]
    pub priority: String,
}

impl Task {
    /// Builds a task from an identifier and the draft fields.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            done: draft.done,
            priority: draft.priority,
        }
    }
}

/// The four user-editable task fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `done`
    Done,
    /// `priority`
    Priority,
}

impl TaskField {
    /// All editable fields in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Description, Self::Done, Self::Priority];

    /// Fields that must be non-empty before a draft can be sent.
    pub const REQUIRED: [Self; 3] = [Self::Name, Self::Description, Self::Priority];

    /// The next field in form order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Done,
            Self::Done => Self::Priority,
            Self::Priority => Self::Name,
        }
    }

    /// The previous field in form order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Priority,
            Self::Description => Self::Name,
            Self::Done => Self::Description,
            Self::Priority => Self::Done,
        }
    }

    /// Human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Done => "done",
            Self::Priority => "priority",
        }
    }
}

impl std::fmt::Display for TaskField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed write to one draft field.
///
/// The value type is fixed by the variant, so a boolean can never land in
/// a text field or the reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// New task name.
    Name(String),
    /// New description.
    Description(String),
    /// New completion flag.
    Done(bool),
    /// New priority label.
    Priority(String),
}

impl FieldUpdate {
    /// The field this update targets.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::Name(_) => TaskField::Name,
            Self::Description(_) => TaskField::Description,
            Self::Done(_) => TaskField::Done,
            Self::Priority(_) => TaskField::Priority,
        }
    }
}

/// Task-shaped values without an identifier: the body of a create request
/// and the working copy behind an edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Task name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Task description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Completion flag.
    #[serde(rename = "estado", default)]
    pub done: bool,
    /// Priority label.
    #[serde(rename = "prioridad")]
    pub priority: String,
}

impl TaskDraft {
    /// Applies a single field write.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::Description(v) => self.description = v,
            FieldUpdate::Done(v) => self.done = v,
            FieldUpdate::Priority(v) => self.priority = v,
        }
    }

    /// Returns the text value of a string field, or `None` for `Done`.
    #[must_use]
    pub fn text(&self, field: TaskField) -> Option<&str> {
        match field {
            TaskField::Name => Some(&self.name),
            TaskField::Description => Some(&self.description),
            TaskField::Priority => Some(&self.priority),
            TaskField::Done => None,
        }
    }

    /// Required fields that are currently empty, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<TaskField> {
        TaskField::REQUIRED
            .into_iter()
            .filter(|f| self.text(*f).is_some_and(str::is_empty))
            .collect()
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            done: task.done,
            priority: task.priority.clone(),
        }
    }
}

/// Payload of an update request: the draft fields plus the target id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBody {
    /// Identifier of the task being updated.
    #[serde(rename = "_id")]
    pub id: TaskId,
    /// New field values.
    #[serde(flatten)]
    pub draft: TaskDraft,
}
