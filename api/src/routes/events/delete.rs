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

/// DELETE /api/events/{id}
///
/// Soft delete. The event vanishes from listings and lookups; its
/// reservation history stays on record.
pub async fn delete_event(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match reservation::delete_event(state.db(), id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Event deleted successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
