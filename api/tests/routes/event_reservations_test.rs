#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::event_reservation::Entity as ReservationEntity;
    use db::models::session_reservation::ReservationStatus;
    use sea_orm::EntityTrait;
    use serde_json::json;

    use crate::helpers::app::{TestApp, make_test_app, send};
    use crate::helpers::data::seed_shifts;

    async fn create_event(app: &TestApp, max_participants: i64) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            "/api/events",
            Some(json!({
                "event_name": "Zine Workshop",
                "description": "Cut and paste",
                "event_date": "2026-04-02",
                "shift_name": "B",
                "max_participants": max_participants,
                "ticket_fee": 0,
                "additional_notes": null,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_admission_counts_the_whole_party() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let event_id = create_event(&app, 4).await;

        // Three of four seats taken.
        let (status, body) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": event_id,
                "full_name": "Sari",
                "members": ["Budi", "Tono"],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_i64().unwrap();

        let row = ReservationEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .expect("reservation stored");
        assert_eq!(row.event_id, event_id);
        assert_eq!(row.status, ReservationStatus::NotAttended);

        // A pair does not fit into the one remaining seat.
        let (status, body) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": event_id,
                "full_name": "Rena",
                "members": ["Ayu"],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Event is fully booked");

        // A single visitor still does.
        let (status, _) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": event_id,
                "full_name": "Rena",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unknown_event_is_not_found() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": 999,
                "full_name": "Sari",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Event not found");
    }

    #[tokio::test]
    async fn test_cancel_returns_the_party_seats() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let event_id = create_event(&app, 4).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": event_id,
                "full_name": "Sari",
                "members": ["Budi", "Tono", "Ayu"],
            })),
        )
        .await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/event-reservations/{id}/status"),
            Some(json!({"status": "canceled", "reason": "rain"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slots_returned"], 4);

        // The freed seats admit a new full party.
        let (status, _) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": event_id,
                "full_name": "Rena",
                "members": ["Dian", "Eka", "Fajar"],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_event_reservations_listing_is_global() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let first = create_event(&app, 4).await;
        let second = create_event(&app, 4).await;

        for event_id in [first, second] {
            send(
                &app,
                "POST",
                "/api/event-reservations",
                Some(json!({"event_id": event_id, "full_name": "Sari"})),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", "/api/event-reservations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        // The per-event view only sees its own rows.
        let (_, body) = send(&app, "GET", &format!("/api/events/{first}/reservations"), None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }
}
