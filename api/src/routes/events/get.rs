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

/// GET /api/events
///
/// Every live event, newest first. Soft-deleted events never appear.
pub async fn list_events(State(state): State<AppState>) -> Response {
    match reservation::list_events(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Events retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/events/{id}
pub async fn get_event(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match reservation::get_event(state.db(), id).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(event, "Event retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/events/{id}/reservations
pub async fn list_event_reservations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match reservation::list_event_reservations(state.db(), id).await {
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
