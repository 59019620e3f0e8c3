use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::reservation;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// GET /api/event-reservations
///
/// Every event reservation across all events, newest first.
pub async fn list_event_reservations(State(state): State<AppState>) -> Response {
    match reservation::list_all_event_reservations(state.db()).await {
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
