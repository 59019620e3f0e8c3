#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::{book, category};
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};

    use crate::helpers::app::{TestApp, make_test_app, send};

    async fn create_category(app: &TestApp, name: &str) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/api/books/categories",
            Some(json!({"category_name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap()
    }

    async fn create_book(app: &TestApp, category_id: i64, copies: i64) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/api/books",
            Some(json!({
                "book_title": "The Sea Around Us",
                "author": "Rachel Carson",
                "category_id": category_id,
                "copies": copies,
                "handled_by": "sam",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"].clone()
    }

    #[tokio::test]
    async fn test_create_book_numbers_copies_and_journals_the_intake() {
        let (app, db) = make_test_app().await;
        let category_id = create_category(&app, "Nature").await;
        let book = create_book(&app, category_id, 3).await;
        let book_id = book["id"].as_i64().unwrap();

        assert_eq!(book["stock"], 3);

        let (_, body) = send(&app, "GET", &format!("/api/books/{book_id}/copies"), None).await;
        let copies = body["data"].as_array().unwrap();
        assert_eq!(copies.len(), 3);
        let numbers: Vec<i64> = copies
            .iter()
            .map(|c| c["copy_number"].as_i64().unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let cat = category::Entity::find_by_id(category_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cat.number_of_items, 1);

        let (_, body) = send(&app, "GET", "/api/books/movements", None).await;
        let moves = body["data"].as_array().unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0]["mode"], "add");
        assert_eq!(moves[0]["stock_before"], 0);
        assert_eq!(moves[0]["stock_after"], 3);
        assert_eq!(moves[0]["handled_by"], "sam");
    }

    #[tokio::test]
    async fn test_duplicate_category_is_rejected() {
        let (app, _db) = make_test_app().await;
        create_category(&app, "Nature").await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/books/categories",
            Some(json!({"category_name": "Nature"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Category already exists");
    }

    #[tokio::test]
    async fn test_retire_copy_restates_the_stock_once() {
        let (app, db) = make_test_app().await;
        let category_id = create_category(&app, "Nature").await;
        let book = create_book(&app, category_id, 2).await;
        let book_id = book["id"].as_i64().unwrap();

        let (_, body) = send(&app, "GET", &format!("/api/books/{book_id}/copies"), None).await;
        let copy_id = body["data"][0]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/books/copies/{copy_id}/retire"),
            Some(json!({"condition": "damaged", "comment": "water", "handled_by": "sam"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["book"]["stock"], 1);
        assert_eq!(body["data"]["copy"]["is_retired"], true);

        let stored = book::Entity::find_by_id(book_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.stock, 1);

        // A copy only leaves circulation once.
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/books/copies/{copy_id}/retire"),
            Some(json!({"condition": "damaged"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Copy is already retired");
    }

    #[tokio::test]
    async fn test_copy_numbers_are_never_reused() {
        let (app, _db) = make_test_app().await;
        let category_id = create_category(&app, "Nature").await;
        let book = create_book(&app, category_id, 2).await;
        let book_id = book["id"].as_i64().unwrap();

        let (_, body) = send(&app, "GET", &format!("/api/books/{book_id}/copies"), None).await;
        let second_copy = body["data"][1]["id"].as_i64().unwrap();

        send(
            &app,
            "PUT",
            &format!("/api/books/copies/{second_copy}/retire"),
            Some(json!({"condition": "lost"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/books/{book_id}/copies"),
            Some(json!({"condition": "good", "handled_by": "sam"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["copy_number"], 3);

        let (_, body) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
        assert_eq!(body["data"]["stock"], 2);
    }

    #[tokio::test]
    async fn test_delete_book_retires_its_copies() {
        let (app, db) = make_test_app().await;
        let category_id = create_category(&app, "Nature").await;
        let book = create_book(&app, category_id, 2).await;
        let book_id = book["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/books/{book_id}?handled_by=sam"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book not found");

        let stored = book::Entity::find_by_id(book_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_deleted);
        assert_eq!(stored.stock, 0);

        let cat = category::Entity::find_by_id(category_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cat.number_of_items, 0);
    }
}
