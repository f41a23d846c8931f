//! In-memory ordered task store.
//!
//! The [`TaskStore`] keeps tasks in insertion order behind a [`RwLock`] and
//! assigns UUID v7 ids on creation, so list order is creation order.

use taskboard_proto::{Task, TaskDraft, TaskId};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Ordered in-memory task storage.
#[derive(Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with `tasks`, kept in the given order.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }

    /// Returns every task in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Appends a new task built from `draft` and returns it.
    pub async fn insert(&self, draft: TaskDraft) -> Task {
        let task = Task::from_draft(TaskId::new(Uuid::now_v7().to_string()), draft);
        self.tasks.write().await.push(task.clone());
        task
    }

    /// Replaces the fields of task `id`, returning the updated task, or
    /// `None` if no such task exists.
    pub async fn update(&self, id: &TaskId, draft: TaskDraft) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let slot = tasks.iter_mut().find(|t| t.id == *id)?;
        *slot = Task::from_draft(id.clone(), draft);
        Some(slot.clone())
    }

    /// Removes task `id`. Returns whether it existed.
    pub async fn remove(&self, id: &TaskId) -> bool {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != *id);
        tasks.len() != before
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}
