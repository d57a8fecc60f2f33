//! Board controller tests: synchronization policy per operation.

use std::io;
use std::sync::Arc;

use mockall::Sequence;
use rstest::rstest;

use crate::task::adapters::memory::{InMemoryCollaborator, RecordedRequest};
use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};
use crate::task::ports::{CollaboratorError, MockTaskCollaborator};
use crate::task::services::{TaskBoard, TaskCommand};

fn fields(title: &str, status: TaskStatus) -> TaskFields {
    TaskFields::new(title, "details", status).expect("valid fields")
}

fn transport_failure() -> CollaboratorError {
    CollaboratorError::transport(io::Error::other("connection reset"))
}

/// Board plus a handle onto the collaborator it talks to.
fn seeded_board(
    entries: impl IntoIterator<Item = TaskFields>,
) -> (TaskBoard<InMemoryCollaborator>, InMemoryCollaborator) {
    let collaborator = InMemoryCollaborator::seeded(entries).expect("seeding should succeed");
    let board = TaskBoard::new(Arc::new(collaborator.clone()));
    (board, collaborator)
}

fn first_task_id(collaborator: &InMemoryCollaborator) -> TaskId {
    collaborator
        .task_ids()
        .expect("collaborator should list ids")
        .first()
        .cloned()
        .expect("collaborator should hold at least one task")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_replaces_the_collection_in_collaborator_order() {
    let (mut board, _) = seeded_board([
        fields("one", TaskStatus::Pending),
        fields("two", TaskStatus::Done),
        fields("three", TaskStatus::InProgress),
    ]);

    let outcome = board.load_tasks().await;

    assert!(outcome.is_completed());
    let titles: Vec<&str> = board.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["one", "two", "three"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_sends_a_partial_update_then_resynchronizes() {
    let (mut board, collaborator) = seeded_board([fields("one", TaskStatus::Pending)]);
    let id = first_task_id(&collaborator);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let outcome = board.advance_status(&id).await;

    assert!(outcome.is_completed());
    let requests = collaborator
        .recorded_requests()
        .expect("requests should be recorded");
    assert_eq!(
        requests,
        [
            RecordedRequest::List,
            RecordedRequest::UpdateStatus {
                id: id.clone(),
                status: TaskStatus::InProgress,
            },
            RecordedRequest::List,
        ]
    );
    let statuses: Vec<TaskStatus> = board.tasks().iter().map(Task::status).collect();
    assert_eq!(statuses, [TaskStatus::InProgress]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_walks_the_chain_and_stops_at_done() {
    let (mut board, collaborator) = seeded_board([fields("one", TaskStatus::Pending)]);
    let id = first_task_id(&collaborator);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let first = board.advance_status(&id).await;
    let second = board.advance_status(&id).await;
    let third = board.advance_status(&id).await;

    assert!(first.is_completed());
    assert!(second.is_completed());
    assert!(third.is_skipped());
    let status_updates: Vec<TaskStatus> = collaborator
        .recorded_requests()
        .expect("requests should be recorded")
        .into_iter()
        .filter_map(|request| match request {
            RecordedRequest::UpdateStatus { status, .. } => Some(status),
            _ => None,
        })
        .collect();
    assert_eq!(status_updates, [TaskStatus::InProgress, TaskStatus::Done]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_unknown_id_is_skipped() {
    let (mut board, collaborator) = seeded_board([]);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let ghost = TaskId::new("ghost").expect("valid identifier");
    let outcome = board.advance_status(&ghost).await;

    assert!(outcome.is_skipped());
    let requests = collaborator
        .recorded_requests()
        .expect("requests should be recorded");
    assert_eq!(requests, [RecordedRequest::List]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_sends_fields_only_and_refreshes() {
    let (mut board, collaborator) = seeded_board([]);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let outcome = board
        .submit(TaskCommand::Create(fields("fresh", TaskStatus::Pending)))
        .await;

    assert!(outcome.is_completed());
    let requests = collaborator
        .recorded_requests()
        .expect("requests should be recorded");
    assert_eq!(
        requests,
        [
            RecordedRequest::List,
            RecordedRequest::Create {
                fields: fields("fresh", TaskStatus::Pending),
            },
            RecordedRequest::List,
        ]
    );
    // The re-fetched task carries a collaborator-assigned identifier.
    let titles: Vec<&str> = board.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["fresh"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_sends_all_fields_and_clears_the_edit_selection() {
    let (mut board, collaborator) = seeded_board([fields("original", TaskStatus::Pending)]);
    let id = first_task_id(&collaborator);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());
    board.begin_editing(id.clone());
    assert!(board.editing_task().is_some());

    let outcome = board
        .submit(TaskCommand::Update(
            id.clone(),
            fields("renamed", TaskStatus::Done),
        ))
        .await;

    assert!(outcome.is_completed());
    assert!(board.editing_task().is_none());
    let requests = collaborator
        .recorded_requests()
        .expect("requests should be recorded");
    assert_eq!(
        requests,
        [
            RecordedRequest::List,
            RecordedRequest::Update {
                id: id.clone(),
                fields: fields("renamed", TaskStatus::Done),
            },
            RecordedRequest::List,
        ]
    );
    let titles: Vec<&str> = board.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["renamed"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_prunes_locally_without_a_refetch() {
    let (mut board, collaborator) = seeded_board([
        fields("keep", TaskStatus::Pending),
        fields("drop", TaskStatus::Done),
    ]);
    let ids = collaborator.task_ids().expect("collaborator should list ids");
    let doomed = ids.last().cloned().expect("two tasks seeded");
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let outcome = board.delete_task(&doomed).await;

    assert!(outcome.is_completed());
    let requests = collaborator
        .recorded_requests()
        .expect("requests should be recorded");
    // One initial load and the delete; no reconciling re-fetch.
    assert_eq!(
        requests,
        [
            RecordedRequest::List,
            RecordedRequest::Delete { id: doomed },
        ]
    );
    let titles: Vec<&str> = board.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["keep"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_id_leaves_the_collection_unchanged() {
    let (mut board, _) = seeded_board([fields("only", TaskStatus::Pending)]);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let ghost = TaskId::new("ghost").expect("valid identifier");
    let outcome = board.delete_task(&ghost).await;

    assert!(outcome.is_completed());
    let titles: Vec<&str> = board.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["only"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn back_to_back_advance_and_delete_end_with_the_delete() {
    let (mut board, collaborator) = seeded_board([fields("contested", TaskStatus::Pending)]);
    let id = first_task_id(&collaborator);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    // Mutations serialize on the board; the later operation wins.
    let advanced = board.advance_status(&id).await;
    let deleted = board.delete_task(&id).await;

    assert!(advanced.is_completed());
    assert!(deleted.is_completed());
    assert!(board.tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn back_to_back_delete_and_advance_skips_the_advance() {
    let (mut board, collaborator) = seeded_board([fields("contested", TaskStatus::Pending)]);
    let id = first_task_id(&collaborator);
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let deleted = board.delete_task(&id).await;
    let advanced = board.advance_status(&id).await;

    assert!(deleted.is_completed());
    assert!(advanced.is_skipped());
    assert!(board.tasks().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_failure_keeps_the_stale_collection_visible() {
    let stale = Task::new(
        TaskId::new("stale-1").expect("valid identifier"),
        fields("stale", TaskStatus::Pending),
    );
    let mut collaborator = MockTaskCollaborator::new();
    let mut sequence = Sequence::new();
    let served = stale.clone();
    collaborator
        .expect_list()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move || Ok(vec![served.clone()]));
    collaborator
        .expect_list()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Err(transport_failure()));
    let mut board = TaskBoard::new(Arc::new(collaborator));

    let first = board.load_tasks().await;
    let second = board.load_tasks().await;

    assert!(first.is_completed());
    assert!(second.failure().is_some_and(CollaboratorError::is_transport));
    assert_eq!(board.tasks(), [stale]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_transport_failure_leaves_cache_untouched() {
    let held = Task::new(
        TaskId::new("held-1").expect("valid identifier"),
        fields("held", TaskStatus::Pending),
    );
    let mut collaborator = MockTaskCollaborator::new();
    let served = held.clone();
    collaborator
        .expect_list()
        .times(1)
        .returning(move || Ok(vec![served.clone()]));
    collaborator
        .expect_delete()
        .times(1)
        .returning(|_| Err(transport_failure()));
    let mut board = TaskBoard::new(Arc::new(collaborator));
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let id = held.id().clone();
    let outcome = board.delete_task(&id).await;

    assert!(outcome.failure().is_some_and(CollaboratorError::is_transport));
    assert_eq!(board.tasks(), [held]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_status_update_still_resynchronizes() {
    let pending = Task::new(
        TaskId::new("pending-1").expect("valid identifier"),
        fields("pending", TaskStatus::Pending),
    );
    let mut collaborator = MockTaskCollaborator::new();
    let mut sequence = Sequence::new();
    let served = pending.clone();
    collaborator
        .expect_list()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move || Ok(vec![served.clone()]));
    collaborator
        .expect_update_status()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_, _| Err(transport_failure()));
    // The resynchronizing re-fetch runs even though the update failed.
    collaborator
        .expect_list()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Ok(Vec::new()));
    let mut board = TaskBoard::new(Arc::new(collaborator));
    let loaded = board.load_tasks().await;
    assert!(loaded.is_completed());

    let id = pending.id().clone();
    let outcome = board.advance_status(&id).await;

    assert!(outcome.failure().is_some_and(CollaboratorError::is_transport));
    assert!(board.tasks().is_empty());
}
