use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

mod delete;
mod get;
mod post;
mod put;

pub use delete::delete_event;
pub use get::{get_event, list_event_reservations, list_events};
pub use post::{check_event_availability, create_event};
pub use put::{update_event, update_event_status};

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/", post(create_event))
        .route("/check-availability", post(check_event_availability))
        .route("/{id}", get(get_event))
        .route("/{id}", put(update_event))
        .route("/{id}", delete(delete_event))
        .route("/{id}/status", put(update_event_status))
        .route("/{id}/reservations", get(list_event_reservations))
}
