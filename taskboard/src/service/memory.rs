//! In-memory task service for offline mode and testing.
//!
//! Keeps an ordered task list behind a mutex, hands out ids `mem-1`,
//! `mem-2`, … and records every call so tests can assert exactly which
//! remote operations an action triggered.

use std::collections::HashMap;

use parking_lot::Mutex;
use taskboard_proto::{Task, TaskDraft, TaskId};

use super::{ServiceError, TaskService};

/// One recorded call against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    /// `list_tasks`
    List,
    /// `create_task`
    Create,
    /// `update_task` for the given id.
    Update(TaskId),
    /// `delete_task` for the given id.
    Delete(TaskId),
}

/// Operation selector for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOp {
    /// `list_tasks`
    List,
    /// `create_task`
    Create,
    /// `update_task`
    Update,
    /// `delete_task`
    Delete,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<ServiceCall>,
    failures: HashMap<ServiceOp, ServiceError>,
}

impl Inner {
    /// Record `call` and consume an injected failure for `op`, if any.
    fn enter(&mut self, call: ServiceCall, op: ServiceOp) -> Result<(), ServiceError> {
        self.calls.push(call);
        self.failures.remove(&op).map_or(Ok(()), Err)
    }
}

/// Process-local [`TaskService`].
#[derive(Debug, Default)]
pub struct InMemoryTaskService {
    inner: Mutex<Inner>,
}

impl InMemoryTaskService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service preloaded with `tasks` (kept in the given order).
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                tasks,
                ..Inner::default()
            }),
        }
    }

    /// Make the next call of `op` fail with `error`. One-shot.
    pub fn fail_next(&self, op: ServiceOp, error: ServiceError) {
        self.inner.lock().failures.insert(op, error);
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.inner.lock().calls.clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    /// Snapshot of the stored tasks.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.lock().tasks.clone()
    }

    /// Replace a stored task's fields behind the client's back, as another
    /// session would.
    pub fn overwrite(&self, task: Task) {
        let mut inner = self.inner.lock();
        if let Some(slot) = inner.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }
}

impl TaskService for InMemoryTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        let mut inner = self.inner.lock();
        inner.enter(ServiceCall::List, ServiceOp::List)?;
        Ok(inner.tasks.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ServiceError> {
        let mut inner = self.inner.lock();
        inner.enter(ServiceCall::Create, ServiceOp::Create)?;
        inner.next_id += 1;
        let task = Task::from_draft(TaskId::new(format!("mem-{}", inner.next_id)), draft.clone());
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, ServiceError> {
        let mut inner = self.inner.lock();
        inner.enter(ServiceCall::Update(id.clone()), ServiceOp::Update)?;
        let slot = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        *slot = Task::from_draft(id.clone(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock();
        inner.enter(ServiceCall::Delete(id.clone()), ServiceOp::Delete)?;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != *id);
        if inner.tasks.len() == before {
            return Err(ServiceError::NotFound(id.clone()));
        }
        Ok(())
    }
}
