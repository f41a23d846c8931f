//! HTTP implementation of [`TaskService`] over reqwest.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use taskboard_proto::{Task, TaskDraft, TaskId, UpdateBody, routes};
use url::Url;

use super::{ServiceError, TaskService};

/// Talks JSON to the task service at a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    client: reqwest::Client,
    /// Validated base URL; route segments are appended to its path.
    base: Url,
}

impl HttpTaskService {
    /// Build a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if `base_url` is not an absolute
    /// `http`/`https` URL, or [`ServiceError::Network`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let parsed = Url::parse(base_url).map_err(|_| ServiceError::InvalidUrl(base_url.into()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base_url.into()));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base: parsed,
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Full URL for `route`, optionally followed by a task id segment.
    ///
    /// The id is pushed as one percent-encoded segment, so `/`, `?` and `#`
    /// inside it never change which resource is addressed.
    fn endpoint(&self, route: &str, id: Option<&TaskId>) -> Result<Url, ServiceError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ServiceError::InvalidUrl(self.base.to_string()))?;
            segments
                .pop_if_empty()
                .extend(route.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }
}

/// Map a transport-level reqwest error.
fn transport_error(e: &reqwest::Error) -> ServiceError {
    if e.is_decode() {
        ServiceError::Decode(e.to_string())
    } else {
        ServiceError::Network(e.to_string())
    }
}

/// Turn non-success responses into [`ServiceError`]s.
///
/// A 404 becomes [`ServiceError::NotFound`] when the call targeted a task.
async fn check_status(resp: Response, target: Option<&TaskId>) -> Result<Response, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND
        && let Some(id) = target
    {
        return Err(ServiceError::NotFound(id.clone()));
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("unknown").to_string()
    } else {
        body
    };
    Err(ServiceError::Server {
        status: status.as_u16(),
        message,
    })
}

impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        let resp = self
            .client
            .get(self.endpoint(routes::LIST, None)?)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let resp = check_status(resp, None).await?;
        let tasks: Vec<Task> = resp.json().await.map_err(|e| transport_error(&e))?;
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ServiceError> {
        let resp = self
            .client
            .post(self.endpoint(routes::CREATE, None)?)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let resp = check_status(resp, None).await?;
        resp.json().await.map_err(|e| transport_error(&e))
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, ServiceError> {
        let body = UpdateBody {
            id: id.clone(),
            draft: draft.clone(),
        };
        let resp = self
            .client
            .put(self.endpoint(routes::UPDATE_PREFIX, Some(id))?)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let resp = check_status(resp, Some(id)).await?;
        resp.json().await.map_err(|e| transport_error(&e))
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ServiceError> {
        let resp = self
            .client
            .delete(self.endpoint(routes::DELETE_PREFIX, Some(id))?)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        check_status(resp, Some(id)).await?;
        Ok(())
    }
}
