use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::event::EventStatus;
use serde::Deserialize;
use services::ServiceError;
use services::reservation::{self, EventInput};

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// PUT /api/events/{id}
///
/// Full-row update. The shift is re-resolved so a renamed window cannot go
/// stale on the event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<EventInput>,
) -> Response {
    match reservation::update_event(state.db(), id, input).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(event, "Event updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct EventStatusRequest {
    pub status: String,
}

/// PUT /api/events/{id}/status
///
/// Opens or closes the event for new admissions. Reservations already on the
/// books are untouched.
pub async fn update_event_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<EventStatusRequest>,
) -> Response {
    let Ok(status) = req.status.parse::<EventStatus>() else {
        return error_response(ServiceError::validation(format!(
            "Unknown event status '{}'",
            req.status
        )));
    };

    match reservation::set_event_status(state.db(), id, status).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                event,
                "Event status updated successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
