#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use chrono::{NaiveDate, Utc};
    use db::models::loan::{self, LoanStatus};
    use sea_orm::ActiveValue::Set;
    use sea_orm::{ActiveModelTrait, EntityTrait};
    use serde_json::{Value, json};

    use crate::helpers::app::{TestApp, make_test_app, send};
    use crate::helpers::data::seed_book;

    fn loan_body(book_id: i64) -> Value {
        json!({
            "book_id1": book_id,
            "full_name": "Sari Dewi",
            "email": "sari@example.com",
            "phone_number": "0812000111",
        })
    }

    async fn create_loan(app: &TestApp, book_id: i64) -> Value {
        let (status, body) = send(app, "POST", "/api/loans", Some(loan_body(book_id))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"].clone()
    }

    #[tokio::test]
    async fn test_create_loan_opens_a_week_long_window() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;

        let created = create_loan(&app, book.id).await;

        assert_eq!(created["status"], "On Going");
        assert_eq!(created["book_title1"], "Silent Spring");
        assert_eq!(created["fine"], false);
        assert_eq!(created["extend_count"], 0);

        let start =
            NaiveDate::parse_from_str(created["loan_start"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        let due =
            NaiveDate::parse_from_str(created["loan_due"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        assert_eq!(due - start, chrono::Duration::days(7));
    }

    #[tokio::test]
    async fn test_paid_checkout_writes_a_transaction_and_absorbs_replays() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;

        let mut body = loan_body(book.id);
        body["payment_id"] = json!("pay-91");
        body["payment_status"] = json!("settlement");
        body["payment_method"] = json!("qris");
        body["amount"] = json!(30000);

        let (status, first) = send(&app, "POST", "/api/loans", Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = first["data"]["id"].as_i64().unwrap();

        let (_, transactions) = send(&app, "GET", &format!("/api/loans/{id}/transactions"), None).await;
        let rows = transactions["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["amount"], 30000);

        // The gateway retries its callback; no second loan appears.
        let (status, replay) = send(&app, "POST", "/api/loans", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(replay["data"]["id"].as_i64().unwrap(), id);
        assert_eq!(loan::Entity::find().all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_extend_rejects_malformed_dates() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;
        let id = create_loan(&app, book.id).await["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/loans/{id}/extend"),
            Some(json!({"loan_due": "04-01-2026"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid date format. Expected YYYY-MM-DD");
    }

    #[tokio::test]
    async fn test_extend_moves_the_due_date_and_counts_once() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;
        let id = create_loan(&app, book.id).await["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/loans/{id}/extend"),
            Some(json!({"loan_due": "2027-01-15"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["loan_due"], "2027-01-15");
        assert_eq!(body["data"]["extend_count"], 1);
        assert_eq!(body["data"]["status"], "On Going");

        // Replaying the same extension converges on the same row.
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/loans/{id}/extend"),
            Some(json!({"loan_due": "2027-01-15"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["extend_count"], 1);
    }

    #[tokio::test]
    async fn test_sweep_flags_overdue_loans() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;

        let stale = loan::ActiveModel {
            book_id1: Set(book.id),
            book_title1: Set("Silent Spring".to_string()),
            full_name: Set("Sari Dewi".to_string()),
            email: Set("sari@example.com".to_string()),
            phone_number: Set("0812000111".to_string()),
            loan_start: Set(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            loan_due: Set(NaiveDate::from_ymd_opt(2020, 1, 8).unwrap()),
            status: Set(LoanStatus::OnGoing),
            fine: Set(false),
            extend_count: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let (status, body) = send(&app, "POST", "/api/loans/sweep", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["marked_overdue"], 1);

        let row = loan::Entity::find_by_id(stale.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, LoanStatus::OverDue);

        // Nothing left to flag on the second pass.
        let (_, body) = send(&app, "POST", "/api/loans/sweep", None).await;
        assert_eq!(body["data"]["marked_overdue"], 0);
    }

    #[tokio::test]
    async fn test_staff_can_toggle_the_fine_flag() {
        let (app, db) = make_test_app().await;
        let book = seed_book(&db, "Silent Spring", 2).await;
        let id = create_loan(&app, book.id).await["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/loans/{id}/fine"),
            Some(json!({"fine": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["fine"], true);

        let (_, body) = send(
            &app,
            "PUT",
            &format!("/api/loans/{id}/fine"),
            Some(json!({"fine": false})),
        )
        .await;
        assert_eq!(body["data"]["fine"], false);
    }
}
