use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::Schedule;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Conflicting schedule for the same employee/date; carries the colliding
    /// record so the response can name it.
    #[error("Schedule conflict detected")]
    ScheduleConflict(Box<Schedule>),

    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmployeeNotFound(_) | StoreError::ScheduleNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            StoreError::Conflict(existing) => AppError::ScheduleConflict(existing),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ScheduleConflict(existing) => (
                StatusCode::CONFLICT,
                json!({
                    "error": format!(
                        "Schedule conflict detected with {} ({}-{})",
                        existing.id, existing.start_time, existing.end_time
                    ),
                    "conflict": *existing,
                }),
            ),
            AppError::Internal(msg) => {
                // Logged server-side; callers get a generic message.
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Something went wrong" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
