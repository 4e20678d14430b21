use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::{models::DashboardSummary, AppState};

/// GET /api/dashboard
///
/// "Today" is the server's local calendar date; all times in the system are
/// naive, so no timezone conversion applies.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Aggregate counts and a per-role employee histogram", body = DashboardSummary)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSummary> {
    let today = Local::now().date_naive();
    Json(state.store.dashboard_summary(today).await)
}
