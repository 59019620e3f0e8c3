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

/// PUT /api/session-reservations/{id}/status
///
/// Moves a reservation through its lifecycle. Canceling frees the party's
/// seats and stores the caller's reason; repeating the current status is a
/// no-op; attended and canceled reservations refuse any further move.
pub async fn update_session_reservation_status(
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

    match reservation::transition_session(state.db(), id, status, req.reason).await {
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
