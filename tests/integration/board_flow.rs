//! Integration tests for the task board state machine.
//!
//! Drives [`TaskBoard`] against the in-memory service and asserts both the
//! resulting client state and the exact remote calls each action issued.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use taskboard::board::{BoardAction, BoardCommand, BoardError, FormTarget, TaskBoard};
use taskboard::service::memory::{InMemoryTaskService, ServiceCall, ServiceOp};
use taskboard::service::ServiceError;
use taskboard_proto::{FieldUpdate, Filter, Task, TaskDraft, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn task(id: &str, name: &str, done: bool, priority: &str) -> Task {
    Task {
        id: TaskId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        done,
        priority: priority.to_string(),
    }
}

/// Board loaded with `[{1, A, pending}, {2, B, done}, {3, C, pending}]` and a
/// clean call log.
async fn loaded_board() -> TaskBoard<InMemoryTaskService> {
    let svc = InMemoryTaskService::with_tasks(vec![
        task("1", "A", false, "low"),
        task("2", "B", true, "high"),
        task("3", "C", false, "low"),
    ]);
    let mut board = TaskBoard::new(svc);
    assert!(board.load().await);
    board.service().clear_calls();
    board
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.to_string()).collect()
}

fn fill_create_draft(board: &mut TaskBoard<InMemoryTaskService>, name: &str) {
    board.update_draft_field(FieldUpdate::Name(name.into()));
    board.update_draft_field(FieldUpdate::Description("some work".into()));
    board.update_draft_field(FieldUpdate::Priority("medium".into()));
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filter_projects_without_reordering() {
    let mut board = loaded_board().await;
    assert_eq!(ids(&board.visible()), ["1", "2", "3"]);

    board.set_filter(Filter::Pending);
    assert_eq!(ids(&board.visible()), ["1", "3"]);

    board.set_filter(Filter::Completed);
    assert_eq!(ids(&board.visible()), ["2"]);

    board.set_filter(Filter::All);
    assert_eq!(ids(&board.visible()), ["1", "2", "3"]);
    assert!(board.service().calls().is_empty());
}

#[tokio::test]
async fn set_filter_is_idempotent() {
    let mut board = loaded_board().await;
    board.set_filter(Filter::Completed);
    let once = ids(&board.visible());
    board.set_filter(Filter::Completed);
    assert_eq!(ids(&board.visible()), once);
    assert_eq!(board.filter(), Filter::Completed);
}

#[tokio::test]
async fn filter_survives_reload() {
    let mut board = loaded_board().await;
    board.set_filter(Filter::Completed);
    board.dispatch(BoardCommand::Load).await.unwrap();
    assert_eq!(board.filter(), Filter::Completed);
    assert_eq!(ids(&board.visible()), ["2"]);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_patches_locally_without_listing() {
    let mut board = loaded_board().await;
    board.delete_task(&TaskId::new("2")).await;

    assert_eq!(
        board.service().calls(),
        vec![ServiceCall::Delete(TaskId::new("2"))]
    );
    assert_eq!(ids(&board.visible()), ["1", "3"]);
}

#[tokio::test]
async fn failed_delete_keeps_collection_and_sets_notice() {
    let mut board = loaded_board().await;
    board
        .service()
        .fail_next(ServiceOp::Delete, ServiceError::Network("refused".into()));
    board.delete_task(&TaskId::new("2")).await;

    assert_eq!(board.tasks().len(), 3);
    let notice = board.notice().expect("notice set");
    assert_eq!(notice.action, BoardAction::Delete);

    // Retry succeeds and clears the notice.
    board.delete_task(&TaskId::new("2")).await;
    assert_eq!(board.tasks().len(), 2);
    assert!(board.notice().is_none());
}

#[tokio::test]
async fn deleting_edited_task_clears_edit_slot() {
    let mut board = loaded_board().await;
    board.begin_edit(&TaskId::new("3")).unwrap();
    board.delete_task(&TaskId::new("3")).await;
    assert_eq!(board.target(), &FormTarget::Creating);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_posts_then_relists_and_resets_draft() {
    let mut board = loaded_board().await;
    fill_create_draft(&mut board, "D");
    board.create_task().await.unwrap();

    assert_eq!(
        board.service().calls(),
        vec![ServiceCall::Create, ServiceCall::List]
    );
    assert_eq!(board.create_draft(), &TaskDraft::default());
    assert_eq!(board.tasks().len(), 4);
    assert_eq!(board.tasks()[3].name, "D");
    assert!(!board.tasks()[3].done);
}

#[tokio::test]
async fn create_with_missing_fields_sends_nothing() {
    let mut board = loaded_board().await;
    board.update_draft_field(FieldUpdate::Name("D".into()));

    let err = board.create_task().await.unwrap_err();
    assert!(matches!(err, BoardError::Validation(_)));
    assert!(board.service().calls().is_empty());
    assert!(board.validation_message().is_some());
    assert_eq!(board.create_draft().name, "D");
}

#[tokio::test]
async fn failed_create_keeps_draft_for_retry() {
    let mut board = loaded_board().await;
    fill_create_draft(&mut board, "D");
    board.service().fail_next(
        ServiceOp::Create,
        ServiceError::Server {
            status: 500,
            message: "boom".into(),
        },
    );

    board.create_task().await.unwrap();
    assert_eq!(board.service().calls(), vec![ServiceCall::Create]);
    assert_eq!(board.create_draft().name, "D");
    assert_eq!(board.notice().map(|n| n.action), Some(BoardAction::Create));
    assert_eq!(board.tasks().len(), 3);
}

#[tokio::test]
async fn create_draft_resets_even_when_relist_fails() {
    let mut board = loaded_board().await;
    fill_create_draft(&mut board, "D");
    board
        .service()
        .fail_next(ServiceOp::List, ServiceError::Network("reset".into()));

    board.create_task().await.unwrap();
    assert_eq!(board.create_draft(), &TaskDraft::default());
    assert_eq!(board.tasks().len(), 3);
    assert!(board.notice().is_none());
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn begin_then_cancel_leaves_everything_unchanged() {
    let mut board = loaded_board().await;
    let before: Vec<Task> = board.tasks().to_vec();

    board.begin_edit(&TaskId::new("1")).unwrap();
    board.update_draft_field(FieldUpdate::Name("changed".into()));
    board.cancel_edit();

    assert_eq!(board.target(), &FormTarget::Creating);
    assert_eq!(board.tasks(), before.as_slice());
    assert!(board.service().calls().is_empty());
}

#[tokio::test]
async fn edit_draft_does_not_touch_collection_until_saved() {
    let mut board = loaded_board().await;
    board.begin_edit(&TaskId::new("2")).unwrap();
    board.update_draft_field(FieldUpdate::Priority("medium".into()));

    assert_eq!(board.tasks()[1].priority, "high");
    assert_eq!(board.active_draft().priority, "medium");
}

#[tokio::test]
async fn save_edit_updates_then_relists() {
    let mut board = loaded_board().await;
    board.begin_edit(&TaskId::new("2")).unwrap();
    board.update_draft_field(FieldUpdate::Priority("medium".into()));
    board.save_edit().await.unwrap();

    assert_eq!(
        board.service().calls(),
        vec![ServiceCall::Update(TaskId::new("2")), ServiceCall::List]
    );
    assert!(board.editing_id().is_none());
    assert_eq!(board.tasks()[1].priority, "medium");
    assert_eq!(board.tasks()[1].name, "B");
}

#[tokio::test]
async fn begin_edit_switches_binding() {
    let mut board = loaded_board().await;
    board.begin_edit(&TaskId::new("1")).unwrap();
    board.update_draft_field(FieldUpdate::Name("lost".into()));
    board.begin_edit(&TaskId::new("3")).unwrap();

    assert_eq!(board.editing_id(), Some(&TaskId::new("3")));
    assert_eq!(board.active_draft().name, "C");
    assert_eq!(board.tasks()[0].name, "A");
}

#[tokio::test]
async fn begin_edit_on_unknown_id_is_rejected() {
    let mut board = loaded_board().await;
    let err = board.begin_edit(&TaskId::new("99")).unwrap_err();
    assert_eq!(err, BoardError::UnknownTask(TaskId::new("99")));
    assert_eq!(board.target(), &FormTarget::Creating);
}

#[tokio::test]
async fn save_without_edit_is_rejected() {
    let mut board = loaded_board().await;
    assert_eq!(board.save_edit().await, Err(BoardError::NoActiveEdit));
    assert!(board.service().calls().is_empty());
}

#[tokio::test]
async fn save_of_task_deleted_elsewhere_keeps_slot_bound() {
    let mut board = loaded_board().await;
    board.begin_edit(&TaskId::new("1")).unwrap();
    board
        .service()
        .fail_next(ServiceOp::Update, ServiceError::NotFound(TaskId::new("1")));

    board.save_edit().await.unwrap();
    assert_eq!(board.editing_id(), Some(&TaskId::new("1")));
    assert_eq!(board.notice().map(|n| n.action), Some(BoardAction::Update));
}

#[tokio::test]
async fn reload_picks_up_changes_made_elsewhere() {
    let mut board = loaded_board().await;
    board.service().overwrite(task("1", "A", true, "low"));

    board.dispatch(BoardCommand::Load).await.unwrap();
    board.set_filter(Filter::Completed);
    assert_eq!(ids(&board.visible()), ["1", "2"]);
}

#[tokio::test]
async fn failed_load_keeps_previous_collection() {
    let mut board = loaded_board().await;
    board
        .service()
        .fail_next(ServiceOp::List, ServiceError::Network("down".into()));

    assert!(!board.load().await);
    assert_eq!(board.tasks().len(), 3);
    assert!(board.notice().is_none());
}
