use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppError;

/// Input DTO for creating or fully replacing an employee.
///
/// Fields are optional at the serde layer so a missing field surfaces as a
/// named 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

impl EmployeeInput {
    /// Requires all three attributes, non-empty after trimming.
    pub fn into_fields(self) -> Result<(String, String, String), AppError> {
        let require = |field: &'static str, value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::BadRequest(format!("Missing required field: {field}")))
        };

        Ok((
            require("name", self.name)?,
            require("role", self.role)?,
            require("email", self.email)?,
        ))
    }
}
