//! The task board controller.
//!
//! `TaskBoard` provides the operations a front end drives: load, filter,
//! create, edit and delete. Every remote call completes before the local
//! state tied to it changes; remote failures are logged, turned into a
//! [`Notice`] where the user acted, and never returned as errors.

use chrono::{DateTime, Local};
use taskboard_proto::{FieldUpdate, Filter, Task, TaskDraft, TaskField, TaskId};

use super::{BoardAction, BoardCommand, BoardError, Notice, ValidationError};
use crate::service::{ServiceError, TaskService};

/// Where form input currently goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// No edit is bound; input fills the create draft.
    Creating,
    /// Task `id` is bound to the edit slot; input fills `draft`.
    Editing {
        /// The task being edited.
        id: TaskId,
        /// Working copy of its editable fields.
        draft: TaskDraft,
    },
}

/// Which draft a validation message was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftKind {
    Create,
    Edit,
}

/// Owns the mirrored task collection and all form state.
pub struct TaskBoard<S> {
    service: S,
    tasks: Vec<Task>,
    filter: Filter,
    target: FormTarget,
    create_draft: TaskDraft,
    validation: Option<(DraftKind, String)>,
    notice: Option<Notice>,
    last_synced: Option<DateTime<Local>>,
}

impl<S: TaskService> TaskBoard<S> {
    /// Creates an empty board backed by `service`. Call [`load`](Self::load)
    /// to populate it.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            filter: Filter::default(),
            target: FormTarget::Creating,
            create_draft: TaskDraft::default(),
            validation: None,
            notice: None,
            last_synced: None,
        }
    }

    /// Sets the starting filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    // -- Read side --------------------------------------------------------

    /// The service this board talks to.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// The full collection in service order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// The filtered view, recomputed from the collection and filter on
    /// every call.
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    /// Where form input is routed.
    #[must_use]
    pub const fn target(&self) -> &FormTarget {
        &self.target
    }

    /// Id bound to the edit slot, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TaskId> {
        match &self.target {
            FormTarget::Editing { id, .. } => Some(id),
            FormTarget::Creating => None,
        }
    }

    /// The create draft, regardless of the current target.
    #[must_use]
    pub const fn create_draft(&self) -> &TaskDraft {
        &self.create_draft
    }

    /// The draft that field writes currently go to.
    #[must_use]
    pub const fn active_draft(&self) -> &TaskDraft {
        match &self.target {
            FormTarget::Editing { draft, .. } => draft,
            FormTarget::Creating => &self.create_draft,
        }
    }

    /// Validation message from the last rejected submit of the draft that
    /// currently receives input.
    ///
    /// A message raised for an edit draft is dropped as soon as the edit
    /// slot is rebound or cleared.
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        match &self.validation {
            Some((kind, message)) if *kind == self.draft_kind() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Outstanding failure notice, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// When the collection was last replaced from a successful list call.
    #[must_use]
    pub const fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    // -- Local operations -------------------------------------------------

    /// Replaces the filter. No remote call.
    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(%filter, "filter changed");
        self.filter = filter;
    }

    /// Binds the edit slot to `id`, seeding the draft from the stored task.
    /// Any edit in progress on another task is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] if `id` is not in the collection;
    /// the edit slot is left untouched.
    pub fn begin_edit(&mut self, id: &TaskId) -> Result<(), BoardError> {
        let Some(draft) = self.tasks.iter().find(|t| t.id == *id).map(TaskDraft::from) else {
            tracing::warn!(task_id = %id, "edit requested for task not on the board");
            return Err(BoardError::UnknownTask(id.clone()));
        };
        if let Some(previous) = self.editing_id()
            && previous != id
        {
            tracing::debug!(discarded = %previous, task_id = %id, "switching edit target");
        }
        self.retarget(FormTarget::Editing {
            id: id.clone(),
            draft,
        });
        Ok(())
    }

    /// Writes one field of whichever draft is active: the bound edit draft
    /// while editing, the create draft otherwise.
    pub fn update_draft_field(&mut self, update: FieldUpdate) {
        match &mut self.target {
            FormTarget::Editing { id, draft } => {
                tracing::trace!(task_id = %id, field = %update.field(), "edit draft write");
                draft.apply(update);
            }
            FormTarget::Creating => {
                tracing::trace!(field = %update.field(), "create draft write");
                self.create_draft.apply(update);
            }
        }
    }

    /// Clears the edit slot, dropping unsaved changes. No remote call.
    pub fn cancel_edit(&mut self) {
        if let FormTarget::Editing { id, .. } = &self.target {
            tracing::debug!(task_id = %id, "edit cancelled");
        }
        self.retarget(FormTarget::Creating);
    }

    /// Clears the notice banner.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- Remote operations ------------------------------------------------

    /// Replaces the collection with the service's list.
    ///
    /// On failure the previous collection is kept and the error is only
    /// logged. Returns whether the list call succeeded.
    pub async fn load(&mut self) -> bool {
        match self.service.list_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "task list loaded");
                self.tasks = tasks;
                self.last_synced = Some(Local::now());
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load tasks");
                false
            }
        }
    }

    /// Submits the create draft.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if name, description or priority
    /// is empty; the validation message is set and nothing is sent.
    pub async fn create_task(&mut self) -> Result<(), BoardError> {
        self.require_fields(DraftKind::Create, self.create_draft.missing_fields())?;

        match self.service.create_task(&self.create_draft).await {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "task created");
                self.create_draft = TaskDraft::default();
                if matches!(self.validation, Some((DraftKind::Create, _))) {
                    self.validation = None;
                }
                self.notice = None;
                self.load().await;
            }
            Err(e) => self.remote_failed(BoardAction::Create, &e),
        }
        Ok(())
    }

    /// Submits the bound edit draft.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoActiveEdit`] if no task is bound, or
    /// [`BoardError::Validation`] if a required field of the draft is empty.
    pub async fn save_edit(&mut self) -> Result<(), BoardError> {
        let FormTarget::Editing { id, draft } = &self.target else {
            return Err(BoardError::NoActiveEdit);
        };
        let (id, draft) = (id.clone(), draft.clone());
        self.require_fields(DraftKind::Edit, draft.missing_fields())?;

        match self.service.update_task(&id, &draft).await {
            Ok(_) => {
                tracing::info!(task_id = %id, "task updated");
                self.retarget(FormTarget::Creating);
                self.notice = None;
                self.load().await;
            }
            Err(e) => self.remote_failed(BoardAction::Update, &e),
        }
        Ok(())
    }

    /// Deletes task `id` remotely, then removes it from the local
    /// collection without re-listing.
    pub async fn delete_task(&mut self, id: &TaskId) {
        match self.service.delete_task(id).await {
            Ok(()) => {
                tracing::info!(task_id = %id, "task deleted");
                self.tasks.retain(|t| t.id != *id);
                if self.editing_id() == Some(id) {
                    self.retarget(FormTarget::Creating);
                }
                self.notice = None;
            }
            Err(e) => self.remote_failed(BoardAction::Delete, &e),
        }
    }

    /// Runs a remote-bound command.
    ///
    /// # Errors
    ///
    /// Propagates the precondition errors of the underlying operation.
    pub async fn dispatch(&mut self, command: BoardCommand) -> Result<(), BoardError> {
        match command {
            BoardCommand::Load => {
                self.load().await;
                Ok(())
            }
            BoardCommand::Create => self.create_task().await,
            BoardCommand::SaveEdit => self.save_edit().await,
            BoardCommand::Delete(id) => {
                self.delete_task(&id).await;
                Ok(())
            }
        }
    }

    // -- Internals --------------------------------------------------------

    const fn draft_kind(&self) -> DraftKind {
        match self.target {
            FormTarget::Editing { .. } => DraftKind::Edit,
            FormTarget::Creating => DraftKind::Create,
        }
    }

    /// Rebinds form input. An edit-side validation message never outlives
    /// the binding it was raised for.
    fn retarget(&mut self, target: FormTarget) {
        if matches!(self.validation, Some((DraftKind::Edit, _))) {
            self.validation = None;
        }
        self.target = target;
    }

    fn require_fields(
        &mut self,
        kind: DraftKind,
        missing: Vec<TaskField>,
    ) -> Result<(), BoardError> {
        if missing.is_empty() {
            return Ok(());
        }
        let err = ValidationError { missing };
        self.validation = Some((kind, err.to_string()));
        Err(err.into())
    }

    fn remote_failed(&mut self, action: BoardAction, error: &ServiceError) {
        tracing::error!(%action, error = %error, "remote call failed");
        self.notice = Some(Notice {
            action,
            message: error.to_string(),
        });
    }
}
