use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::inventory;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteBookQuery {
    pub handled_by: Option<String>,
}

/// DELETE /api/books/{id}?handled_by=sam
///
/// Soft-deletes the title and retires every live copy with it. The loan
/// history keeps pointing at the row.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(q): Query<DeleteBookQuery>,
) -> Response {
    match inventory::delete_book(state.db(), id, q.handled_by).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Book deleted successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
