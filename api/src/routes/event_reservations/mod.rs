use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

mod get;
mod post;
mod put;

pub use get::list_event_reservations;
pub use post::create_event_reservation;
pub use put::update_event_reservation_status;

pub fn event_reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_event_reservations))
        .route("/", post(create_event_reservation))
        .route("/{id}/status", put(update_event_reservation_status))
}
