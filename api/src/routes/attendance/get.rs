use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Timelike, Utc};
use serde::Deserialize;
use services::{attendance, clock};

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub date: Option<NaiveDate>,
    pub hour: Option<u32>,
    pub search: Option<String>,
}

/// GET /api/attendance/dashboard?date=2026-03-14&hour=15&search=dewi
///
/// The daily roster view: active staff (optionally name-filtered), each
/// staff member's folded outcome for the date, the shift covering `hour` and
/// who is on the floor for it. Date and hour default to venue-local now.
pub async fn attendance_dashboard(
    State(state): State<AppState>,
    Query(q): Query<DashboardQuery>,
) -> Response {
    let now = Utc::now();
    let date = q.date.unwrap_or_else(|| clock::venue_date(now));
    let hour = q.hour.unwrap_or_else(|| clock::venue_time(now).hour());

    match attendance::dashboard(state.db(), date, hour, q.search.as_deref()).await {
        Ok(view) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                view,
                "Attendance dashboard retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
