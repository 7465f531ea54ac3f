//! Responses to persistence failures and concurrent modification.

use std::sync::Arc;

use super::helpers::{app_with_repository, send};
use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use chrono::Utc;
use eyre::ensure;
use mockall::mock;
use rstest::{fixture, rstest};
use serde_json::json;
use tareas::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle, TaskVersion},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

mock! {
    pub Repository {}

    #[async_trait]
    impl TaskRepository for Repository {
        async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn update(
            &self,
            task: &Task,
            expected_version: TaskVersion,
        ) -> TaskRepositoryResult<()>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
    }
}

fn storage_failure() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection reset by peer"))
}

#[fixture]
fn stored_task() -> Task {
    let now = Utc::now();
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(4).expect("valid id"),
        title: TaskTitle::new("Buy milk").expect("valid title"),
        description: None,
        status: TaskStatus::Pendiente,
        version: TaskVersion::INITIAL,
        created_at: now,
        updated_at: now,
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_failure_hides_detail() -> eyre::Result<()> {
    let mut repository = MockRepository::new();
    repository
        .expect_list()
        .times(1)
        .returning(|| Err(storage_failure()));
    let router = app_with_repository(Arc::new(repository));

    let (status, body) = send(&router, Method::GET, "/api/tasks", None).await?;

    ensure!(status == StatusCode::INTERNAL_SERVER_ERROR);
    ensure!(body == json!({ "message": "Server Error" }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_failure_is_a_server_error() -> eyre::Result<()> {
    let mut repository = MockRepository::new();
    repository
        .expect_insert()
        .times(1)
        .returning(|_| Err(storage_failure()));
    let router = app_with_repository(Arc::new(repository));

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/tasks",
        Some(&json!({ "title": "Buy milk" })),
    )
    .await?;

    ensure!(status == StatusCode::INTERNAL_SERVER_ERROR);
    ensure!(!body.to_string().contains("connection reset"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_create_never_reaches_repository() -> eyre::Result<()> {
    let mut repository = MockRepository::new();
    repository.expect_insert().never();
    let router = app_with_repository(Arc::new(repository));

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/tasks",
        Some(&json!({ "title": "   " })),
    )
    .await?;

    ensure!(status == StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_update_is_a_conflict(stored_task: Task) -> eyre::Result<()> {
    let task_id = stored_task.id();
    let mut repository = MockRepository::new();
    repository
        .expect_find_by_id()
        .times(1)
        .returning(move |_| Ok(Some(stored_task.clone())));
    repository
        .expect_update()
        .withf(|task, expected| {
            task.status() == TaskStatus::Completada && *expected == TaskVersion::INITIAL
        })
        .times(1)
        .returning(move |_, expected| {
            Err(TaskRepositoryError::VersionConflict {
                task_id,
                expected,
                actual: expected.next(),
            })
        });
    let router = app_with_repository(Arc::new(repository));

    let (status, body) = send(
        &router,
        Method::PATCH,
        &format!("/api/tasks/{task_id}"),
        Some(&json!({ "status": "completada" })),
    )
    .await?;

    ensure!(status == StatusCode::CONFLICT, "unexpected status {status}");
    ensure!(body["message"].is_string());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_never_validates(stored_task: Task) -> eyre::Result<()> {
    let task_id = stored_task.id();
    let mut repository = MockRepository::new();
    repository.expect_find_by_id().never();
    repository
        .expect_delete()
        .withf(move |id| *id == task_id)
        .times(1)
        .returning(|_| Ok(true));
    let router = app_with_repository(Arc::new(repository));

    let (status, _) = send(
        &router,
        Method::DELETE,
        &format!("/api/tasks/{task_id}"),
        None,
    )
    .await?;

    ensure!(status == StatusCode::NO_CONTENT);
    Ok(())
}
