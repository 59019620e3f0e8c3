use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use db::models::attendance_record::AttendanceStatus;
use serde::Deserialize;
use services::ServiceError;
use services::attendance;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AttendanceRequest {
    /// Internal id or employee code, both accepted.
    pub staff_reference: String,
    pub status: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub evidence_url: Option<String>,
}

/// POST /api/attendance/records
///
/// Records an attendance fact (P, A, L, CO, ECO) for the venue-local date of
/// the timestamp. Resubmitting the same status for the same day moves the
/// timestamp instead of adding a row.
///
/// ### Responses
/// - `201 Created` with the stored record
/// - `400 Bad Request` for an unknown status code
/// - `404 Not Found` when the staff reference matches nobody
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(req): Json<AttendanceRequest>,
) -> Response {
    let Ok(status) = req.status.parse::<AttendanceStatus>() else {
        return error_response(ServiceError::validation(format!(
            "Unknown attendance status '{}'",
            req.status
        )));
    };

    let timestamp = req.timestamp.unwrap_or_else(Utc::now);

    match attendance::record_attendance(
        state.db(),
        &req.staff_reference,
        status,
        timestamp,
        req.evidence_url,
    )
    .await
    {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                record,
                "Attendance recorded successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
