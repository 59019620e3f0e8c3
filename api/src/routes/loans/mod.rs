use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

mod get;
mod post;
mod put;

pub use get::{get_loan, list_loan_transactions, list_loans};
pub use post::{create_loan, sweep_overdue_loans};
pub use put::{extend_loan, set_loan_fine};

pub fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_loans))
        .route("/", post(create_loan))
        .route("/sweep", post(sweep_overdue_loans))
        .route("/{id}", get(get_loan))
        .route("/{id}/transactions", get(list_loan_transactions))
        .route("/{id}/extend", put(extend_loan))
        .route("/{id}/fine", put(set_loan_fine))
}
