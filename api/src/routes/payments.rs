use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use services::payment::{self, PaymentNotification};

use super::common::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/notifications", post(payment_notification))
}

/// POST /api/payments/notifications
///
/// Gateway callback intake. Settled payments are recorded and then applied
/// to the loan they paid for; pending and failed callbacks are acknowledged
/// without writing anything; replays of an already-recorded payment are
/// absorbed.
///
/// ### Request Body
/// ```json
/// {
///   "order_id": "pay-417",
///   "transaction_status": "settlement",
///   "payment_type": "qris",
///   "loan_id": 12,
///   "loan_due": "2026-04-01",
///   "amount": 15000
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with `{outcome, duplicate, transaction}`
/// - `400 Bad Request` when a paid callback carries no loan reference
/// - `502 Bad Gateway` when the payment was recorded but the loan update
///   kept failing; the case needs manual follow-up
async fn payment_notification(
    State(state): State<AppState>,
    Json(notification): Json<PaymentNotification>,
) -> Response {
    match payment::apply_notification(state.db(), notification).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                receipt,
                "Payment notification processed successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
