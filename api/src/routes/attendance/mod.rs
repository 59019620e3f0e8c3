use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod get;
mod post;

pub use get::attendance_dashboard;
pub use post::record_attendance;

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(attendance_dashboard))
        .route("/records", post(record_attendance))
}
