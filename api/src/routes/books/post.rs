use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::inventory::{self, NewBook, NewCopy};

use super::common::CopyRequest;
use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// POST /api/books
///
/// Adds a title with its initial copies (numbered from 1) and journals the
/// stock movement.
///
/// ### Request Body
/// ```json
/// {
///   "book_title": "The Sea Around Us",
///   "author": "Rachel Carson",
///   "category_id": 3,
///   "copies": 2,
///   "handled_by": "sam"
/// }
/// ```
pub async fn create_book(State(state): State<AppState>, Json(input): Json<NewBook>) -> Response {
    match inventory::create_book(state.db(), input).await {
        Ok(book) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(book, "Book created successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category_name: String,
}

/// POST /api/books/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Response {
    match inventory::create_category(state.db(), &req.category_name).await {
        Ok(category) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                category,
                "Category created successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/books/{id}/copies
///
/// Adds one physical copy to the title. Copy numbers keep growing past
/// retired units, so a number is never reused.
pub async fn add_book_copy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CopyRequest>,
) -> Response {
    let input = NewCopy {
        book_id: id,
        condition: req.condition,
        comment: req.comment,
        handled_by: req.handled_by,
    };

    match inventory::add_copy(state.db(), input).await {
        Ok(copy) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(copy, "Copy added successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
