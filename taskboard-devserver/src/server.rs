//! HTTP routes of the development server.
//!
//! Implements the task service route table from [`taskboard_proto::routes`]
//! on top of a shared [`TaskStore`]. Drafts with empty required fields are
//! rejected with `400`; unknown ids yield `404`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use taskboard_proto::{Task, TaskDraft, TaskId, UpdateBody, routes};

use crate::store::TaskStore;

/// Request failures, rendered as `{"error": "..."}` with a matching status.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// Required fields missing from the submitted draft.
    #[error("missing required fields: {0}")]
    Invalid(String),
    /// Body `_id` disagrees with the path.
    #[error("body id {body} does not match path id {path}")]
    IdMismatch {
        /// Id from the URL path.
        path: String,
        /// Id from the JSON body.
        body: String,
    },
    /// No task with this id.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Reject drafts with empty required fields.
fn require_fields(draft: &TaskDraft) -> Result<(), ApiError> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    Err(ApiError::Invalid(names.join(", ")))
}

async fn list_tasks(State(store): State<Arc<TaskStore>>) -> Json<Vec<Task>> {
    let tasks = store.list().await;
    tracing::debug!(count = tasks.len(), "list");
    Json(tasks)
}

async fn create_task(
    State(store): State<Arc<TaskStore>>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    require_fields(&draft)?;
    let task = store.insert(draft).await;
    tracing::info!(task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(store): State<Arc<TaskStore>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<Task>, ApiError> {
    if body.id.as_str() != id {
        return Err(ApiError::IdMismatch {
            path: id,
            body: body.id.to_string(),
        });
    }
    require_fields(&body.draft)?;
    let task = store
        .update(&body.id, body.draft)
        .await
        .ok_or_else(|| ApiError::NotFound(body.id.clone()))?;
    tracing::info!(task_id = %task.id, "task updated");
    Ok(Json(task))
}

async fn delete_task(
    State(store): State<Arc<TaskStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = TaskId::new(id);
    if !store.remove(&id).await {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(task_id = %id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Builds the router over `store`.
pub fn router(store: Arc<TaskStore>) -> Router {
    Router::new()
        .route(routes::LIST, get(list_tasks))
        .route(routes::CREATE, post(create_task))
        .route(routes::UPDATE_PATTERN, put(update_task))
        .route(routes::DELETE_PATTERN, delete(delete_task))
        .with_state(store)
}

/// Starts the server on `addr` with an empty store.
///
/// Returns the bound address (useful with port 0) and the serve task.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), Box<dyn std::error::Error + Send + Sync>>
{
    start_server_with_store(addr, Arc::new(TaskStore::new())).await
}

/// Starts the server on `addr` over an existing store.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_store(
    addr: &str,
    store: Arc<TaskStore>,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), Box<dyn std::error::Error + Send + Sync>>
{
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "dev server error");
        }
    });

    Ok((bound_addr, handle))
}
