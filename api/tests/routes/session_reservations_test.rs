#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::session_reservation::{Entity as ReservationEntity, ReservationStatus};
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};

    use crate::helpers::app::{make_test_app, send};
    use crate::helpers::data::seed_shifts;

    fn booking(full_name: &str, members: Value) -> Value {
        json!({
            "category": "group",
            "arrival_date": "2026-03-14",
            "shift_name": "A",
            "full_name": full_name,
            "members": members,
        })
    }

    // ---------------------------
    // create
    // ---------------------------

    #[tokio::test]
    async fn test_create_session_reservation_persists_row() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Sari", json!(["Budi", "Tono"]))),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Reservation created successfully");

        let id = body["data"]["id"].as_i64().unwrap();
        let row = ReservationEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .expect("reservation stored");
        assert_eq!(row.status, ReservationStatus::NotAttended);
        assert_eq!(row.shift_start.to_string(), "10:00:00");
        assert_eq!(row.group_member1.as_deref(), Some("Budi"));
        assert_eq!(row.group_member2.as_deref(), Some("Tono"));
        assert_eq!(row.group_member3, None);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_shift() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let mut body = booking("Sari", json!(["Budi"]));
        body["shift_name"] = json!("Z");

        let (status, body) = send(&app, "POST", "/api/session-reservations", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid shift selected");
    }

    #[tokio::test]
    async fn test_slot_capacity_rejects_the_third_booking() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        for name in ["First", "Second"] {
            let (status, _) = send(
                &app,
                "POST",
                "/api/session-reservations",
                Some(booking(name, json!(["Guest"]))),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Third", json!(["Guest"]))),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body["message"],
            "Sorry, this shift is already fully booked. Please choose another shift or date."
        );
    }

    // ---------------------------
    // check-availability
    // ---------------------------

    #[tokio::test]
    async fn test_check_availability_counts_seats_not_bookings() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        // One booking, three people.
        let (status, _) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Sari", json!(["Budi", "Tono"]))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            "POST",
            "/api/session-reservations/check-availability",
            Some(json!({
                "arrival_date": "2026-03-14",
                "shift_name": "A",
                "reservation_type": "group",
                "group_size": 15,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], true);
        assert_eq!(body["data"]["current_people"], 3);
        assert_eq!(body["data"]["available_slots"], 15);
        assert_eq!(
            body["data"]["message"],
            "Available 15 slots out of a total of 18 slots"
        );

        let (status, body) = send(
            &app,
            "POST",
            "/api/session-reservations/check-availability",
            Some(json!({
                "arrival_date": "2026-03-14",
                "shift_name": "A",
                "reservation_type": "group",
                "group_size": 16,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], false);
        assert_eq!(
            body["data"]["message"],
            "Sorry, only 15 slots remaining out of a total of 18 slots"
        );
    }

    // ---------------------------
    // status transitions
    // ---------------------------

    #[tokio::test]
    async fn test_cancel_frees_the_party_and_keeps_the_reason() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Sari", json!(["Budi", "Tono"]))),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/session-reservations/{id}/status"),
            Some(json!({"status": "canceled", "reason": "sick"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slots_returned"], 3);

        let row = ReservationEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, ReservationStatus::Canceled);
        assert_eq!(row.cancellation_reason.as_deref(), Some("sick"));

        // Canceling again is a no-op that does not rewrite the reason.
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/session-reservations/{id}/status"),
            Some(json!({"status": "canceled", "reason": "changed my mind"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slots_returned"], 0);

        let row = ReservationEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.cancellation_reason.as_deref(), Some("sick"));
    }

    #[tokio::test]
    async fn test_terminal_reservation_refuses_other_moves() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Sari", json!(["Budi"]))),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        send(
            &app,
            "PUT",
            &format!("/api/session-reservations/{id}/status"),
            Some(json!({"status": "canceled"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/session-reservations/{id}/status"),
            Some(json!({"status": "attended"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Reservation is already canceled");
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/session-reservations",
            Some(booking("Sari", json!(["Budi"]))),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/session-reservations/{id}/status"),
            Some(json!({"status": "vanished"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Unknown reservation status 'vanished'");
    }
}
