use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub total_schedules: usize,
    pub today_schedules: usize,
    pub pending_schedules: usize,
    pub confirmed_schedules: usize,
    /// Employee count per role; values sum to `total_employees`.
    pub roles: BTreeMap<String, usize>,
}
