use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::loan;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtendRequest {
    pub loan_due: String,
}

/// PUT /api/loans/{id}/extend
///
/// Moves the due date and reopens the loan. The date must be `YYYY-MM-DD`;
/// anything else is rejected before the loan is touched. A `502` means the
/// payment went through but the loan row could not be updated and needs
/// manual follow-up.
pub async fn extend_loan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ExtendRequest>,
) -> Response {
    match loan::extend_loan(state.db(), id, &req.loan_due).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Loan extended successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct FineRequest {
    pub fine: bool,
}

/// PUT /api/loans/{id}/fine
///
/// Staff toggle for the fine flag. Settling a fine through the payment
/// gateway lands on the payments endpoint instead.
pub async fn set_loan_fine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<FineRequest>,
) -> Response {
    match loan::set_fine(state.db(), id, req.fine).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(updated, "Loan updated successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
