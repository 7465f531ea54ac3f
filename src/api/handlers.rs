//! Request handlers for the task endpoints.

use super::{
    ApiError,
    dto::{HealthResponse, TaskResponse},
};
use crate::task::{
    domain::TaskId, ports::TaskRepository, services::TaskService, validation::TaskFields,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::DefaultClock;

/// Task service over any repository, as shared by the handlers.
pub type DynTaskService = TaskService<dyn TaskRepository, DefaultClock>;

/// Shared handler dependencies.
#[derive(Clone)]
pub struct AppState {
    tasks: DynTaskService,
}

impl AppState {
    /// Creates handler state around a task service.
    #[must_use]
    pub const fn new(tasks: DynTaskService) -> Self {
        Self { tasks }
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &DynTaskService {
        &self.tasks
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// `GET /api/health`.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// `GET /api/tasks`: every task ordered by identifier.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the repository fails.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = state.tasks().list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `POST /api/tasks`: creates a task, answering 201.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] for an unreadable body,
/// [`ApiError::Validation`] for rejected fields, or [`ApiError::Internal`].
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskFields>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(fields) = payload?;
    let task = state.tasks().create(&fields).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `GET /api/tasks/:id`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for a missing task or unusable id, or
/// [`ApiError::Internal`].
pub async fn show_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.tasks().get(parse_id(&raw_id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT` and `PATCH /api/tasks/:id`: applies a partial update.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`], [`ApiError::BadRequest`],
/// [`ApiError::Validation`], [`ApiError::Conflict`], or
/// [`ApiError::Internal`].
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskFields>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let id = parse_id(&raw_id)?;
    let Json(fields) = payload?;
    let task = state.tasks().update(id, &fields).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `DELETE /api/tasks/:id`: answers 204 with an empty body.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] or [`ApiError::Internal`].
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tasks().delete(parse_id(&raw_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

// An id that can never exist is reported like any other missing task.
fn parse_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse().map_err(|_| ApiError::NotFound)
}
