use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use services::ServiceError;

use crate::response::ApiResponse;

/// Body of the `PUT .../{id}/status` endpoints. `reason` only matters when
/// the target status is a cancellation.
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: String,
    pub reason: Option<String>,
}

/// Maps a service failure onto the HTTP surface in one place.
///
/// Validation → 400, NotFound → 404, Capacity → 409, Reconciliation → 502
/// (the message tells the operator what to fix by hand), database failures →
/// 500.
pub fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Capacity(_) => StatusCode::CONFLICT,
        ServiceError::Reconciliation(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("{err}");
    }

    (status, Json(ApiResponse::<()>::error(err.to_string()))).into_response()
}
