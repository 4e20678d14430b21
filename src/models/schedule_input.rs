use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::AppError;

/// Input DTO for creating a schedule. Date and times arrive as strings and
/// are parsed at the handler boundary so format errors map to 400s naming
/// the offending field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleInput {
    pub employee_id: Option<Uuid>,
    #[schema(example = "2024-01-15")]
    pub date: Option<String>,
    #[schema(example = "09:00")]
    pub start_time: Option<String>,
    #[schema(example = "17:00")]
    pub end_time: Option<String>,
    pub role: Option<String>,
}

/// Input DTO for partially updating a schedule. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleInput {
    #[schema(example = "09:00")]
    pub start_time: Option<String>,
    #[schema(example = "17:00")]
    pub end_time: Option<String>,
    pub status: Option<super::ScheduleStatus>,
}

pub(crate) fn require<T>(field: &'static str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
}
