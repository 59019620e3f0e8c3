use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::inventory;

use crate::response::ApiResponse;
use crate::routes::common::error_response;
use crate::state::AppState;

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Response {
    match inventory::list_books(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Books retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/books/categories
pub async fn list_categories(State(state): State<AppState>) -> Response {
    match inventory::list_categories(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Categories retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/books/movements
///
/// The stock journal, newest first: one row per add, retire or delete with
/// the before and after counts.
pub async fn list_movements(State(state): State<AppState>) -> Response {
    match inventory::list_movements(state.db()).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows,
                "Stock movements retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/books/{id}
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match inventory::get_book(state.db(), id).await {
        Ok(book) => (
            StatusCode::OK,
            Json(ApiResponse::success(book, "Book retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /api/books/{id}/copies
///
/// Every physical copy of the title, retired ones included.
pub async fn list_book_copies(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match inventory::list_copies(state.db(), id).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Copies retrieved successfully")),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}
