//! HTTP route paths of the task service, relative to its base URL.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list   | `GET`    | `/tareas` |
//! | create | `POST`   | `/add-tareas` |
//! | update | `PUT`    | `/update-tareas/{id}` |
//! | delete | `DELETE` | `/tareas/{id}` |
//!
//! The `{id}` segment is a single path segment: clients percent-encode the
//! id so ids containing `/`, `?` or `#` still address one task.

/// `GET` returns every task in service order.
pub const LIST: &str = "/tareas";

/// `POST` a draft to create a task.
pub const CREATE: &str = "/add-tareas";

/// Collection path a task id is appended to for updates.
pub const UPDATE_PREFIX: &str = "/update-tareas";

/// Collection path a task id is appended to for deletes.
pub const DELETE_PREFIX: &str = LIST;

/// Router pattern for updates (axum path syntax).
pub const UPDATE_PATTERN: &str = "/update-tareas/{id}";

/// Router pattern for deletes (axum path syntax).
pub const DELETE_PATTERN: &str = "/tareas/{id}";
