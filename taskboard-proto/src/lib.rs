//! Shared protocol definitions for the task service wire format.

pub mod filter;
pub mod routes;
pub mod task;

pub use filter::{Filter, FilterParseError};
pub use task::{FieldUpdate, Task, TaskDraft, TaskField, TaskId, UpdateBody};
