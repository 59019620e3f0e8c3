use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use services::capacity;
use services::reservation::{self, EventInput};

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// POST /api/events
///
/// Publishes an event. The named shift is resolved against the catalog and
/// its window copied onto the event; new events open for admission
/// immediately.
///
/// ### Request Body
/// ```json
/// {
///   "event_name": "Poetry Night",
///   "description": "Open readings",
///   "event_date": "2026-04-02",
///   "shift_name": "C",
///   "max_participants": 30,
///   "ticket_fee": 25000,
///   "additional_notes": "Bring your own zine"
/// }
/// ```
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> Response {
    match reservation::create_event(state.db(), input, Utc::now()).await {
        Ok(event) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(event, "Event created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct EventAvailabilityRequest {
    pub event_id: i64,
    pub reservation_type: Option<String>,
    pub group_size: Option<i64>,
}

/// POST /api/events/check-availability
///
/// Advisory seat count against the event's capacity, mirroring the session
/// check.
pub async fn check_event_availability(
    State(state): State<AppState>,
    Json(req): Json<EventAvailabilityRequest>,
) -> Response {
    let requested = if req.reservation_type.as_deref() == Some("group") {
        req.group_size.unwrap_or(1)
    } else {
        1
    };

    match capacity::event_availability(state.db(), req.event_id, requested).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                report,
                "Availability checked successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
