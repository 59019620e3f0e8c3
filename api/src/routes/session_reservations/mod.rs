use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

mod get;
mod post;
mod put;

pub use get::{get_session_reservation, list_session_reservations};
pub use post::{check_session_availability, create_session_reservation};
pub use put::update_session_reservation_status;

pub fn session_reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_session_reservations))
        .route("/", post(create_session_reservation))
        .route("/check-availability", post(check_session_availability))
        .route("/{id}", get(get_session_reservation))
        .route("/{id}/status", put(update_session_reservation_status))
}
