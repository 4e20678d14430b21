use serde::Serialize;
use utoipa::ToSchema;

use crate::scheduling::TimeOfDay;

/// A named reference shift offered to clients as a starting point when
/// building a rota (Morning, Afternoon, Night). Read-only data.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPreset {
    pub id: String,
    pub name: String,
    #[schema(value_type = String, example = "06:00")]
    pub start_time: TimeOfDay,
    #[schema(value_type = String, example = "14:00")]
    pub end_time: TimeOfDay,
}
