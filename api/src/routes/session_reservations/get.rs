use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::reservation;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// GET /api/session-reservations
///
/// Every session reservation, newest first.
pub async fn list_session_reservations(State(state): State<AppState>) -> Response {
    match reservation::list_session_reservations(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Reservations retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/session-reservations/{id}
pub async fn get_session_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match reservation::get_session_reservation(state.db(), id).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                row,
                "Reservation retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
