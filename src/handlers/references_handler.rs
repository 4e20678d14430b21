use axum::Json;

use crate::models::ShiftPreset;
use crate::scheduling::TimeOfDay;

/// GET /api/shifts - the standard shift presets offered by the UI
#[utoipa::path(
    get,
    path = "/api/shifts",
    responses(
        (status = 200, description = "Reference shift presets", body = Vec<ShiftPreset>)
    ),
    tag = "references"
)]
pub async fn get_shift_presets() -> Json<Vec<ShiftPreset>> {
    let preset = |id: &str, name: &str, start: u16, end: u16| ShiftPreset {
        id: id.to_string(),
        name: name.to_string(),
        start_time: TimeOfDay::from_minutes(start * 60),
        end_time: TimeOfDay::from_minutes(end * 60),
    };

    Json(vec![
        preset("shift1", "Morning", 6, 14),
        preset("shift2", "Afternoon", 14, 22),
        preset("shift3", "Night", 22, 6),
    ])
}
