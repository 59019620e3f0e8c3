use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use common::CopyRequest;
pub use delete::delete_book;
pub use get::{get_book, list_book_copies, list_books, list_categories, list_movements};
pub use post::{add_book_copy, create_book, create_category};
pub use put::retire_book_copy;

pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books))
        .route("/", post(create_book))
        .route("/categories", get(list_categories))
        .route("/categories", post(create_category))
        .route("/movements", get(list_movements))
        .route("/copies/{copy_id}/retire", put(retire_book_copy))
        .route("/{id}", get(get_book))
        .route("/{id}", delete(delete_book))
        .route("/{id}/copies", get(list_book_copies))
        .route("/{id}/copies", post(add_book_copy))
}
