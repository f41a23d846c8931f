//! Integration tests for the HTTP task service client.
//!
//! Each test starts the in-memory dev server on an ephemeral port and talks
//! to it through [`HttpTaskService`], so the JSON wire format, the route
//! table and the status mapping are exercised end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use taskboard::board::{BoardAction, TaskBoard};
use taskboard::service::{HttpTaskService, ServiceError, TaskService};
use taskboard_devserver::server::start_server_with_store;
use taskboard_devserver::store::TaskStore;
use taskboard_proto::{FieldUpdate, Filter, Task, TaskDraft, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn draft(name: &str, done: bool) -> TaskDraft {
    TaskDraft {
        name: name.to_string(),
        description: format!("{name} description"),
        done,
        priority: "low".to_string(),
    }
}

fn client(base_url: &str) -> HttpTaskService {
    HttpTaskService::new(base_url, Duration::from_secs(2), Duration::from_secs(5))
        .expect("valid base url")
}

/// Starts a dev server over `store` and returns a client pointed at it.
async fn serve(store: Arc<TaskStore>) -> (HttpTaskService, tokio::task::JoinHandle<()>) {
    let (addr, handle) = start_server_with_store("127.0.0.1:0", store)
        .await
        .expect("dev server should bind");
    (client(&format!("http://{addr}")), handle)
}

// ---------------------------------------------------------------------------
// Service client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn crud_round_trip() {
    let (svc, handle) = serve(Arc::new(TaskStore::new())).await;

    assert!(svc.list_tasks().await.unwrap().is_empty());

    let a = svc.create_task(&draft("A", false)).await.unwrap();
    let b = svc.create_task(&draft("B", true)).await.unwrap();
    assert_eq!(a.name, "A");
    assert!(b.done);

    let listed = svc.list_tasks().await.unwrap();
    assert_eq!(listed, vec![a.clone(), b.clone()]);

    let mut changed = TaskDraft::from(&a);
    changed.priority = "high".to_string();
    let updated = svc.update_task(&a.id, &changed).await.unwrap();
    assert_eq!(updated.id, a.id);
    assert_eq!(updated.priority, "high");

    svc.delete_task(&b.id).await.unwrap();
    let listed = svc.list_tasks().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].priority, "high");

    handle.abort();
}

#[tokio::test]
async fn unknown_id_maps_to_not_found() {
    let (svc, handle) = serve(Arc::new(TaskStore::new())).await;
    let ghost = TaskId::new("ghost");

    assert_eq!(
        svc.update_task(&ghost, &draft("X", false)).await,
        Err(ServiceError::NotFound(ghost.clone()))
    );
    assert_eq!(
        svc.delete_task(&ghost).await,
        Err(ServiceError::NotFound(ghost))
    );

    handle.abort();
}

#[tokio::test]
async fn invalid_draft_maps_to_server_error() {
    let (svc, handle) = serve(Arc::new(TaskStore::new())).await;

    let err = svc.create_task(&TaskDraft::default()).await.unwrap_err();
    match err {
        ServiceError::Server { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("name"), "message was {message}");
        }
        other => panic!("expected server error, got {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn ids_with_reserved_characters_address_one_task() {
    let awkward = ["a/b", "a?b", "a#b", "a%2Fb"];
    let store = Arc::new(TaskStore::with_tasks(
        awkward
            .iter()
            .map(|id| Task::from_draft(TaskId::new(*id), draft(id, false)))
            .collect(),
    ));
    let (svc, handle) = serve(Arc::clone(&store)).await;

    let id = TaskId::new("a/b");
    let mut changed = draft("renamed", true);
    changed.priority = "high".to_string();
    let updated = svc.update_task(&id, &changed).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(store.list().await[0].name, "renamed");

    for (remaining, raw) in (0..awkward.len()).rev().zip(awkward) {
        svc.delete_task(&TaskId::new(raw)).await.unwrap();
        assert_eq!(store.len().await, remaining, "after deleting {raw:?}");
    }

    handle.abort();
}

#[tokio::test]
async fn closed_port_maps_to_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let svc = client(&format!("http://{addr}"));
    assert!(matches!(
        svc.list_tasks().await,
        Err(ServiceError::Network(_))
    ));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let svc = client("http://127.0.0.1:1/api/");
    assert_eq!(svc.base_url(), "http://127.0.0.1:1/api");
}

// ---------------------------------------------------------------------------
// Board over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn board_drives_the_dev_server() {
    let store = Arc::new(TaskStore::with_tasks(vec![
        Task::from_draft(TaskId::new("a"), draft("A", false)),
        Task::from_draft(TaskId::new("b"), draft("B", true)),
    ]));
    let (svc, handle) = serve(Arc::clone(&store)).await;

    let mut board = TaskBoard::new(svc).with_filter(Filter::Pending);
    assert!(board.load().await);
    assert_eq!(board.visible().len(), 1);

    // Create
    board.update_draft_field(FieldUpdate::Name("C".into()));
    board.update_draft_field(FieldUpdate::Description("third".into()));
    board.update_draft_field(FieldUpdate::Priority("medium".into()));
    board.create_task().await.unwrap();
    assert_eq!(board.tasks().len(), 3);
    assert_eq!(board.visible().len(), 2);

    // Edit: mark A done
    let a_id = board.tasks()[0].id.clone();
    board.begin_edit(&a_id).unwrap();
    board.update_draft_field(FieldUpdate::Done(true));
    board.save_edit().await.unwrap();
    assert!(board.editing_id().is_none());
    assert!(board.tasks()[0].done);
    assert_eq!(board.visible().len(), 1);

    // Delete
    let b_id = board.tasks()[1].id.clone();
    board.delete_task(&b_id).await;
    assert_eq!(board.tasks().len(), 2);
    assert_eq!(store.len().await, 2);

    handle.abort();
}

#[tokio::test]
async fn board_reports_delete_of_vanished_task() {
    let store = Arc::new(TaskStore::new());
    let a = store.insert(draft("A", false)).await;
    let (svc, handle) = serve(Arc::clone(&store)).await;

    let mut board = TaskBoard::new(svc);
    board.load().await;
    assert!(store.remove(&a.id).await);

    board.delete_task(&a.id).await;
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.notice().map(|n| n.action), Some(BoardAction::Delete));

    handle.abort();
}
