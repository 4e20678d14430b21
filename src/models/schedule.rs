use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::scheduling::{ShiftInterval, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "09:00")]
    pub start_time: TimeOfDay,
    #[schema(value_type = String, example = "17:00")]
    pub end_time: TimeOfDay,
    pub role: String,
    pub status: ScheduleStatus,
}

impl Schedule {
    pub fn interval(&self) -> ShiftInterval {
        ShiftInterval::new(self.start_time, self.end_time)
    }
}

/// A schedule joined with its employee's display attributes for listing.
/// A dangling `employee_id` is rendered as "Unknown" rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWithEmployee {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub employee_name: String,
    pub employee_email: String,
}
