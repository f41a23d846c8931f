//! Task Service Client abstraction.
//!
//! Defines the [`TaskService`] trait through which the board talks to the
//! remote task store. Concrete implementations:
//! - [`http::HttpTaskService`]: reqwest client for the real service
//! - [`memory::InMemoryTaskService`]: process-local store for offline mode and tests

pub mod http;
pub mod memory;

use taskboard_proto::{Task, TaskDraft, TaskId};

pub use http::HttpTaskService;
pub use memory::InMemoryTaskService;

/// Errors returned by a remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Transport failure: connection refused, reset, or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The targeted task does not exist on the service.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The response body was not the expected JSON.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("invalid service URL {0:?}")]
    InvalidUrl(String),
}

/// Async client for the four remote task operations.
///
/// Implementations never retry; a failed call is reported once and the
/// caller decides what to do.
pub trait TaskService: Send + Sync {
    /// Fetch the full task list in service order.
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<Task>, ServiceError>> + Send;

    /// Create a task from `draft`. The service assigns the id.
    fn create_task(
        &self,
        draft: &TaskDraft,
    ) -> impl Future<Output = Result<Task, ServiceError>> + Send;

    /// Replace the editable fields of task `id` with `draft`.
    fn update_task(
        &self,
        id: &TaskId,
        draft: &TaskDraft,
    ) -> impl Future<Output = Result<Task, ServiceError>> + Send;

    /// Delete task `id`.
    fn delete_task(&self, id: &TaskId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
