#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::{loan, transaction};
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};

    use crate::helpers::app::{TestApp, make_test_app, send};
    use crate::helpers::data::seed_book;

    async fn open_loan(app: &TestApp, book_id: i64) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/api/loans",
            Some(json!({
                "book_id1": book_id,
                "full_name": "Sari Dewi",
                "email": "sari@example.com",
                "phone_number": "0812000111",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap()
    }

    fn extension_callback(loan_id: i64) -> Value {
        json!({
            "order_id": "pay-417",
            "transaction_status": "settlement",
            "payment_type": "qris",
            "loan_id": loan_id,
            "loan_due": "2027-02-01",
            "amount": 15000,
        })
    }

    #[tokio::test]
    async fn test_settlement_extends_the_loan() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Dune", 1).await;
        let loan_id = open_loan(&app, book.id).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/payments/notifications",
            Some(extension_callback(loan_id)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["outcome"], "paid");
        assert_eq!(body["data"]["duplicate"], false);
        assert_eq!(body["data"]["transaction"]["payment_id"], "pay-417");

        let row = loan::Entity::find_by_id(loan_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.loan_due.to_string(), "2027-02-01");
        assert_eq!(row.extend_count, 1);
    }

    #[tokio::test]
    async fn test_replayed_callback_is_absorbed() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Dune", 1).await;
        let loan_id = open_loan(&app, book.id).await;

        send(
            &app,
            "POST",
            "/api/payments/notifications",
            Some(extension_callback(loan_id)),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/payments/notifications",
            Some(extension_callback(loan_id)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["duplicate"], true);

        let row = loan::Entity::find_by_id(loan_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.extend_count, 1);
        assert_eq!(
            transaction::Entity::find().all(&db).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_pending_and_failed_callbacks_store_nothing() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Dune", 1).await;
        let loan_id = open_loan(&app, book.id).await;

        for (gateway_status, outcome) in [("pending", "pending"), ("deny", "failed")] {
            let mut callback = extension_callback(loan_id);
            callback["transaction_status"] = json!(gateway_status);

            let (status, body) = send(
                &app,
                "POST",
                "/api/payments/notifications",
                Some(callback),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["data"]["outcome"], outcome);
            assert_eq!(body["data"]["transaction"], Value::Null);
        }

        assert!(transaction::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paid_callback_without_loan_reference_is_rejected() {
        let (app, db) = make_test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/payments/notifications",
            Some(json!({
                "order_id": "pay-500",
                "transaction_status": "capture",
                "payment_type": "credit_card",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Loan reference is missing from the payment");
        assert!(transaction::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fine_settlement_clears_the_flag() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Dune", 1).await;
        let loan_id = open_loan(&app, book.id).await;

        send(
            &app,
            "PUT",
            &format!("/api/loans/{loan_id}/fine"),
            Some(json!({"fine": true})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/payments/notifications",
            Some(json!({
                "order_id": "pay-fine-9",
                "transaction_status": "settlement",
                "payment_type": "qris",
                "loan_id": loan_id,
                "amount": 5000,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);

        let row = loan::Entity::find_by_id(loan_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert!(!row.fine);
    }
}
