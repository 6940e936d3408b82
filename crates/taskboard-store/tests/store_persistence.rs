use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;
use taskboard_core::{Clock, FixedClock, SequentialIdGenerator};
use taskboard_domain::{
    filter_tasks_on, DueDateFilter, FieldUpdate, NewTask, PriorityFilter, TaskBoardOperations,
    TaskFilters, TaskPriority, TaskUpdate,
};
use taskboard_persistence::{BoardGateway, FileBlobStore, MemoryBlobStore};
use taskboard_store::TaskBoardStore;
use tempfile::tempdir;

const KEY: &str = "taskboard_data";

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap())
}

async fn open(blobs: Arc<MemoryBlobStore>) -> (TaskBoardStore, tokio::task::JoinHandle<()>) {
    let (store, worker) = TaskBoardStore::open(BoardGateway::new(blobs, KEY)).await;
    let store = store
        .with_id_generator(SequentialIdGenerator::new("id"))
        .with_clock(clock());
    (store, worker.spawn())
}

async fn shutdown(mut store: TaskBoardStore, handle: tokio::task::JoinHandle<()>) {
    store.close_save_channel();
    drop(store);
    handle.await.unwrap();
}

fn saved(blobs: &MemoryBlobStore) -> Value {
    serde_json::from_slice(&blobs.snapshot(KEY).unwrap()).unwrap()
}

#[tokio::test]
async fn test_sprint_scenario_is_persisted() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let (mut store, handle) = open(blobs.clone()).await;

    store.create_board("Sprint 1".into(), String::new()); // id-1
    store.set_current_board("id-1");
    store.create_column("id-1", "Todo".into()); // id-2
    store.create_column("id-1", "Doing".into()); // id-3
    store.create_task("id-2", NewTask::new("Write spec")); // id-4
    store.move_task("id-4", "id-3", Some(0));

    let state = store.state();
    let current = state.current_board().unwrap();
    assert_eq!(current.title, "Sprint 1");
    assert!(current.column("id-2").unwrap().tasks.is_empty());
    let doing = current.column("id-3").unwrap();
    assert_eq!(doing.tasks.len(), 1);
    assert_eq!(doing.tasks[0].column_id, "id-3");
    assert_eq!(doing.tasks[0].order, 0);

    shutdown(store, handle).await;

    let raw = saved(&blobs);
    assert_eq!(raw["version"], 2);
    let doing = &raw["data"][0]["columns"][1];
    assert_eq!(doing["title"], "Doing");
    assert_eq!(doing["tasks"][0]["title"], "Write spec");
    assert_eq!(doing["tasks"][0]["columnId"], "id-3");
}

#[tokio::test]
async fn test_reopen_restores_boards_without_selection() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let (mut store, handle) = open(blobs.clone()).await;
    store.create_board("Keep me".into(), "notes".into());
    store.set_current_board("id-1");
    shutdown(store, handle).await;

    let (store, handle) = open(blobs.clone()).await;
    assert_eq!(store.state().boards.len(), 1);
    assert_eq!(store.state().boards[0].description, "notes");
    assert!(store.state().current_board().is_none());
    shutdown(store, handle).await;
}

#[tokio::test]
async fn test_delete_column_cascade_is_saved() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let (mut store, handle) = open(blobs.clone()).await;

    store.create_board("Board".into(), String::new()); // id-1
    store.set_current_board("id-1");
    store.create_column("id-1", "Todo".into()); // id-2
    store.create_column("id-1", "Done".into()); // id-3
    store.create_task("id-2", NewTask::new("one"));
    store.create_task("id-2", NewTask::new("two"));
    store.create_task("id-3", NewTask::new("three"));

    store.delete_column("id-2");
    assert_eq!(store.state().task_count(), 1);
    assert_eq!(store.state().column("id-3").unwrap().tasks.len(), 1);

    shutdown(store, handle).await;
    let raw = saved(&blobs);
    let columns = raw["data"][0]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0]["tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_last_board_saves_empty_collection() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let (mut store, handle) = open(blobs.clone()).await;

    store.create_board("Temporary".into(), String::new());
    store.delete_board("id-1");
    shutdown(store, handle).await;

    assert_eq!(saved(&blobs)["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let blobs = Arc::new(MemoryBlobStore::new().with_blob(KEY, "not json at all"));
    let (mut store, handle) = open(blobs.clone()).await;
    assert!(store.state().boards.is_empty());

    store.create_board("Fresh".into(), String::new());
    shutdown(store, handle).await;
    assert_eq!(saved(&blobs)["data"][0]["title"], "Fresh");
}

#[tokio::test]
async fn test_update_and_filter_tasks() {
    let blobs = Arc::new(MemoryBlobStore::new());
    let (mut store, handle) = open(blobs).await;

    store.create_board("Board".into(), String::new()); // id-1
    store.set_current_board("id-1");
    store.create_column("id-1", "Todo".into()); // id-2
    store.create_task(
        "id-2",
        NewTask::new("Fix login").with_priority(TaskPriority::High),
    ); // id-3
    store.create_task("id-2", NewTask::new("Polish docs")); // id-4

    let yesterday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    store.update_task(
        "id-3",
        TaskUpdate {
            due_date: FieldUpdate::Set(yesterday),
            ..Default::default()
        },
    );

    let now = clock().local_now();
    let column = store.state().column("id-2").unwrap();

    let high = TaskFilters {
        priority: PriorityFilter::High,
        ..Default::default()
    };
    let ids: Vec<&str> = filter_tasks_on(column.sorted_tasks(), &high, now)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["id-3"]);

    let overdue = TaskFilters {
        due_date: DueDateFilter::Overdue,
        ..Default::default()
    };
    let overdue_tasks = filter_tasks_on(&column.tasks, &overdue, now);
    assert_eq!(overdue_tasks.len(), 1);
    assert!(overdue_tasks[0].is_overdue(now));

    shutdown(store, handle).await;
}

#[tokio::test]
async fn test_file_backed_session() {
    let dir = tempdir().unwrap();
    let gateway = BoardGateway::new(Arc::new(FileBlobStore::new(dir.path())), KEY);
    let (store, worker) = TaskBoardStore::open(gateway).await;
    let mut store = store.with_id_generator(SequentialIdGenerator::new("f"));
    let handle = worker.spawn();

    store.create_board("On disk".into(), String::new());
    store.close_save_channel();
    handle.await.unwrap();

    let gateway = BoardGateway::new(Arc::new(FileBlobStore::new(dir.path())), KEY);
    let boards = gateway.load().await;
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].id, "f-1");
}
