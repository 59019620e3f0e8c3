use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use common::config::Config;
use serde::Deserialize;
use services::reservation::{self, NewSessionReservation};
use services::capacity;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::services::email::EmailService;
use crate::state::AppState;

/// POST /api/session-reservations
///
/// Books a reading-session slot.
///
/// ### Request Body
/// ```json
/// {
///   "category": "group",
///   "arrival_date": "2026-03-14",
///   "shift_name": "A",
///   "full_name": "Sari Dewi",
///   "email": "sari@example.com",
///   "members": ["Budi", "Tono"],
///   "payment_id": "pay-81",
///   "payment_status": "settlement",
///   "payment_method": "qris",
///   "amount": 50000
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored reservation
/// - `400 Bad Request` on validation failures ("Invalid shift selected", ...)
/// - `409 Conflict` when the slot already holds the booking cap
pub async fn create_session_reservation(
    State(state): State<AppState>,
    Json(input): Json<NewSessionReservation>,
) -> Response {
    let recipient = input.email.clone();
    let max_bookings = Config::get().max_session_bookings;

    match reservation::create_session_reservation(state.db(), input, max_bookings, Utc::now())
        .await
    {
        Ok(created) => {
            if let Some(to) = recipient {
                if let Err(err) = EmailService::send_reservation_confirmation(
                    &to,
                    &created.full_name,
                    created.arrival_date,
                    &created.shift_name,
                )
                .await
                {
                    log::warn!(
                        "Failed to send confirmation email for reservation {}: {}",
                        created.id,
                        err
                    );
                }
            }
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    created,
                    "Reservation created successfully",
                )),
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionAvailabilityRequest {
    pub arrival_date: NaiveDate,
    pub shift_name: String,
    pub reservation_type: Option<String>,
    pub group_size: Option<i64>,
}

/// POST /api/session-reservations/check-availability
///
/// Advisory seat count for a slot before the visitor commits. Group requests
/// are checked against the whole party size, everything else against one seat.
pub async fn check_session_availability(
    State(state): State<AppState>,
    Json(req): Json<SessionAvailabilityRequest>,
) -> Response {
    let requested = if req.reservation_type.as_deref() == Some("group") {
        req.group_size.unwrap_or(1)
    } else {
        1
    };

    match capacity::session_availability(state.db(), req.arrival_date, &req.shift_name, requested)
        .await
    {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                report,
                "Availability checked successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
