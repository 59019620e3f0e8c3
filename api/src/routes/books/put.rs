use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::inventory::{self, RetireCopy};

use super::common::CopyRequest;
use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// PUT /api/books/copies/{copy_id}/retire
///
/// Takes a copy out of circulation, restates the title's stock and journals
/// the movement, all in one transaction. Retiring twice is refused.
pub async fn retire_book_copy(
    State(state): State<AppState>,
    Path(copy_id): Path<i64>,
    Json(req): Json<CopyRequest>,
) -> Response {
    let input = RetireCopy {
        copy_id,
        condition: req.condition,
        comment: req.comment,
        handled_by: req.handled_by,
    };

    match inventory::retire_copy(state.db(), input).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(outcome, "Copy retired successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
