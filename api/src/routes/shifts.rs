use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, extract::State};
use db::models::shift;

use super::common::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn shift_routes() -> Router<AppState> {
    Router::new().route("/", get(list_shifts))
}

/// GET /shifts
///
/// The shift catalog every booking resolves against.
async fn list_shifts(State(state): State<AppState>) -> Response {
    match shift::Model::find_all(state.db()).await {
        Ok(shifts) => (
            StatusCode::OK,
            Json(ApiResponse::success(shifts, "Shifts retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}
