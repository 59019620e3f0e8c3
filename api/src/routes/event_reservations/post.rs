use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use services::reservation::{self, NewEventReservation};

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// POST /api/event-reservations
///
/// Admits a party (the booker plus up to four companions) against the
/// event's remaining seats.
///
/// ### Responses
/// - `201 Created` with the stored reservation
/// - `400 Bad Request` when the event is closed or the body is invalid
/// - `404 Not Found` for an unknown event
/// - `409 Conflict` when the party does not fit ("Event is fully booked")
pub async fn create_event_reservation(
    State(state): State<AppState>,
    Json(input): Json<NewEventReservation>,
) -> Response {
    match reservation::create_event_reservation(state.db(), input, Utc::now()).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                created,
                "Reservation created successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
