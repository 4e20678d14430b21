use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    models::{
        schedule_input::require, CreateScheduleInput, Schedule, ScheduleWithEmployee,
        UpdateScheduleInput,
    },
    scheduling::{ShiftInterval, TimeOfDay},
    store::{NewSchedule, SchedulePatch, ScheduleFilter},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSchedulesQuery {
    pub date: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<Uuid>,
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {field} format (YYYY-MM-DD)")))
}

fn parse_time(field: &'static str, raw: &str) -> Result<TimeOfDay, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {field} format (HH:MM)")))
}

/// GET /api/schedules?date=&employeeId=
#[utoipa::path(
    get,
    path = "/api/schedules",
    params(GetSchedulesQuery),
    responses(
        (status = 200, description = "Schedules with employee details, optionally filtered by date and employee", body = Vec<ScheduleWithEmployee>),
        (status = 400, description = "Invalid date filter format")
    ),
    tag = "schedules"
)]
pub async fn get_schedules(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetSchedulesQuery>,
) -> AppResult<Json<Vec<ScheduleWithEmployee>>> {
    let date = query
        .date
        .as_deref()
        .map(|raw| parse_date("date", raw))
        .transpose()?;

    let schedules = state
        .store
        .list_schedules(ScheduleFilter {
            date,
            employee_id: query.employee_id,
        })
        .await;

    Ok(Json(schedules))
}

/// POST /api/schedules
#[utoipa::path(
    post,
    path = "/api/schedules",
    request_body = CreateScheduleInput,
    responses(
        (status = 201, description = "Schedule created with status pending", body = Schedule),
        (status = 400, description = "Missing field or bad date/time format"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Overlapping schedule for the same employee and date")
    ),
    tag = "schedules"
)]
pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateScheduleInput>,
) -> AppResult<(StatusCode, Json<Schedule>)> {
    let employee_id = require("employeeId", input.employee_id)?;
    let date = parse_date("date", &require("date", input.date)?)?;
    let start = parse_time("startTime", &require("startTime", input.start_time)?)?;
    let end = parse_time("endTime", &require("endTime", input.end_time)?)?;
    let role = require("role", input.role.filter(|r| !r.trim().is_empty()))?;

    let schedule = state
        .store
        .create_schedule(NewSchedule {
            employee_id,
            date,
            interval: ShiftInterval::new(start, end),
            role,
        })
        .await?;

    tracing::debug!(schedule_id = %schedule.id, %employee_id, %date, "schedule created");
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/schedules/{id}
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleInput,
    responses(
        (status = 200, description = "Schedule updated", body = Schedule),
        (status = 400, description = "Bad time format"),
        (status = 404, description = "Schedule not found"),
        (status = 409, description = "Interval change would overlap another schedule")
    ),
    tag = "schedules"
)]
pub async fn update_schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateScheduleInput>,
) -> AppResult<Json<Schedule>> {
    let patch = SchedulePatch {
        interval_start: input
            .start_time
            .as_deref()
            .map(|raw| parse_time("startTime", raw))
            .transpose()?,
        interval_end: input
            .end_time
            .as_deref()
            .map(|raw| parse_time("endTime", raw))
            .transpose()?,
        status: input.status,
    };

    let schedule = state.store.update_schedule(id, patch).await?;
    Ok(Json(schedule))
}

/// DELETE /api/schedules/{id}
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    params(
        ("id" = Uuid, Path, description = "Schedule ID")
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "Schedule not found")
    ),
    tag = "schedules"
)]
pub async fn delete_schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete_schedule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
