use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Timelike, Utc};
use db::models::staff;
use serde::Deserialize;
use services::{attendance, clock};

use super::common::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_staff))
        .route("/on-shift", get(on_shift_staff))
}

/// GET /api/staff
///
/// The active roster. Non-active staff are kept on file but never listed
/// here and never count toward a shift.
async fn list_staff(State(state): State<AppState>) -> Response {
    match staff::Model::find_active(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Staff retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err.into()),
    }
}

#[derive(Debug, Deserialize)]
struct OnShiftQuery {
    hour: Option<u32>,
}

/// GET /api/staff/on-shift?hour=15
///
/// Who is rostered on the floor for the shift covering `hour` (default: the
/// current venue hour). Outside all shift windows the list is empty.
async fn on_shift_staff(State(state): State<AppState>, Query(q): Query<OnShiftQuery>) -> Response {
    let hour = q.hour.unwrap_or_else(|| clock::venue_time(Utc::now()).hour());

    match attendance::current_shift_staff(state.db(), hour).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Staff retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
