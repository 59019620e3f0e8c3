use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::loan;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// GET /api/loans
///
/// Every loan, newest first.
pub async fn list_loans(State(state): State<AppState>) -> Response {
    match loan::list_loans(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Loans retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/loans/{id}
pub async fn get_loan(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match loan::get_loan(state.db(), id).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Loan retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/loans/{id}/transactions
///
/// The payment trail behind the loan: checkout, extensions, fine
/// settlements.
pub async fn list_loan_transactions(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match loan::loan_transactions(state.db(), id).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Transactions retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
