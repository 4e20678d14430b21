use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    models::{Employee, EmployeeInput},
    AppResult, AppState,
};

/// GET /api/employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "List of all employees in insertion order", body = Vec<Employee>)
    ),
    tag = "employees"
)]
pub async fn get_employees(State(state): State<Arc<AppState>>) -> Json<Vec<Employee>> {
    Json(state.store.list_employees().await)
}

/// POST /api/employees
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing name, role, or email")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(input): Json<EmployeeInput>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let (name, role, email) = input.into_fields()?;
    let employee = state.store.create_employee(name, role, email).await;

    tracing::debug!(employee_id = %employee.id, "employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/{id}
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Missing name, role, or email"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let (name, role, email) = input.into_fields()?;
    let employee = state.store.update_employee(id, name, role, email).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
