use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::session_reservation::ReservationStatus;
use services::ServiceError;
use services::reservation;

use crate::response::ApiResponse;
use crate::routes::common::{StatusChangeRequest, error_response};
use crate::state::AppState;

/// PUT /api/event-reservations/{id}/status
///
/// Same lifecycle as session reservations: canceling frees the party's
/// seats, terminal states refuse further moves, replays are no-ops.
pub async fn update_event_reservation_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StatusChangeRequest>,
) -> Response {
    let Ok(status) = req.status.parse::<ReservationStatus>() else {
        return error_response(ServiceError::validation(format!(
            "Unknown reservation status '{}'",
            req.status
        )));
    };

    match reservation::transition_event_reservation(state.db(), id, status, req.reason).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                outcome,
                "Reservation status updated successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
