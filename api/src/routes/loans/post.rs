use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use services::loan::{self, NewLoan};
use services::clock;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// POST /api/loans
///
/// Opens a loan for one or two titles. The borrowing window starts on the
/// venue-local date and runs for a week.
///
/// ### Request Body
/// ```json
/// {
///   "book_id1": 12,
///   "book_id2": null,
///   "full_name": "Sari Dewi",
///   "email": "sari@example.com",
///   "phone_number": "0812000111",
///   "payment_id": "pay-91",
///   "payment_status": "settlement",
///   "payment_method": "qris",
///   "amount": 30000
/// }
/// ```
pub async fn create_loan(State(state): State<AppState>, Json(input): Json<NewLoan>) -> Response {
    let today = clock::venue_date(Utc::now());

    match loan::create_loan(state.db(), input, today).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(created, "Loan created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Serialize)]
pub struct SweepOutcome {
    pub marked_overdue: u64,
}

/// POST /api/loans/sweep
///
/// Flags every ongoing loan whose due date has passed (venue-local). The
/// sweep is level-triggered and safe to run as often as wanted.
pub async fn sweep_overdue_loans(State(state): State<AppState>) -> Response {
    let today = clock::venue_date(Utc::now());

    match loan::sweep_overdue(state.db(), today).await {
        Ok(marked_overdue) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SweepOutcome { marked_overdue },
                "Overdue sweep completed successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
