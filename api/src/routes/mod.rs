//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, one directory (or file) per resource:
//! - `/health` → liveness probe
//! - `/shifts` → the shift catalog bookings resolve against
//! - `/session-reservations` → study-session bookings and their lifecycle
//! - `/events`, `/event-reservations` → events and their bookings
//! - `/staff`, `/attendance` → staff roster and the attendance dashboard
//! - `/books` → catalog, physical copies and the stock journal
//! - `/loans` → loan lifecycle, extensions and fines
//! - `/payments` → payment-gateway callback intake

use axum::Router;

use crate::state::AppState;

pub mod attendance;
pub mod books;
pub mod common;
pub mod event_reservations;
pub mod events;
pub mod health;
pub mod loans;
pub mod payments;
pub mod session_reservations;
pub mod shifts;
pub mod staff;

/// Builds the complete application router. The caller nests this under
/// `/api` and supplies the listener.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/shifts", shifts::shift_routes())
        .nest(
            "/session-reservations",
            session_reservations::session_reservation_routes(),
        )
        .nest("/events", events::event_routes())
        .nest(
            "/event-reservations",
            event_reservations::event_reservation_routes(),
        )
        .nest("/staff", staff::staff_routes())
        .nest("/attendance", attendance::attendance_routes())
        .nest("/books", books::book_routes())
        .nest("/loans", loans::loan_routes())
        .nest("/payments", payments::payment_routes())
        .with_state(app_state)
}
