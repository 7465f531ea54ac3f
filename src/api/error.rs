//! Mapping of service failures onto HTTP responses.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskServiceError,
    validation::{FieldViolation, ValidationError},
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned for server-side failures; the detail is only logged.
const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Failure of an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted fields were rejected (422).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed task does not exist (404).
    #[error("Task not found.")]
    NotFound,

    /// The task changed while the request was being handled (409).
    #[error("Task {0} was modified by another request. Reload it and try again.")]
    Conflict(TaskId),

    /// The request body could not be read as a JSON object (400).
    #[error("{0}")]
    BadRequest(String),

    /// An unexpected server-side failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(validation) => Self::Validation(validation),
            TaskServiceError::NotFound(_) => Self::NotFound,
            TaskServiceError::Conflict(task_id) => Self::Conflict(task_id),
            TaskServiceError::Domain(TaskDomainError::InvalidStateTransition {
                from, to, ..
            }) => Self::Validation(FieldViolation::InvalidTransition { from, to }.into()),
            other @ (TaskServiceError::Domain(_) | TaskServiceError::Repository(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Validation(validation) => json!({
                "message": validation.message(),
                "errors": validation.field_messages(),
            }),
            Self::Internal(detail) => {
                error!(error = %detail, "request failed");
                json!({ "message": SERVER_ERROR_MESSAGE })
            }
            Self::NotFound | Self::Conflict(_) | Self::BadRequest(_) => {
                json!({ "message": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
