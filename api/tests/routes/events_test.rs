#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::event::{Entity as EventEntity, EventStatus};
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};

    use crate::helpers::app::{TestApp, make_test_app, send};
    use crate::helpers::data::seed_shifts;

    fn event_body(max_participants: i64) -> Value {
        json!({
            "event_name": "Poetry Night",
            "description": "Open readings",
            "event_date": "2026-04-02",
            "shift_name": "C",
            "max_participants": max_participants,
            "ticket_fee": 25000,
            "additional_notes": null,
        })
    }

    async fn create_event(app: &TestApp, max_participants: i64) -> i64 {
        let (status, body) = send(app, "POST", "/api/events", Some(event_body(max_participants))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_create_event_copies_the_shift_window() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let id = create_event(&app, 30).await;

        let row = EventEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .expect("event stored");
        assert_eq!(row.status, EventStatus::Open);
        assert_eq!(row.shift_start.to_string(), "18:00:00");
        assert_eq!(row.shift_end.to_string(), "22:00:00");
    }

    #[tokio::test]
    async fn test_create_event_rejects_unknown_shift() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;

        let mut body = event_body(30);
        body["shift_name"] = json!("Z");

        let (status, body) = send(&app, "POST", "/api/events", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid shift selected");
    }

    #[tokio::test]
    async fn test_event_availability_reports_against_event_capacity() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let id = create_event(&app, 6).await;

        // Party of two: the booker plus one companion.
        let (status, _) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": id,
                "full_name": "Sari",
                "members": ["Budi"],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            "POST",
            "/api/events/check-availability",
            Some(json!({
                "event_id": id,
                "reservation_type": "group",
                "group_size": 4,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], true);
        assert_eq!(body["data"]["current_participants"], 2);
        assert_eq!(
            body["data"]["message"],
            "Available 4 slots out of a total of 6 slots"
        );

        let (status, body) = send(
            &app,
            "POST",
            "/api/events/check-availability",
            Some(json!({
                "event_id": id,
                "reservation_type": "group",
                "group_size": 5,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["available"], false);
        assert_eq!(
            body["data"]["message"],
            "Sorry, only 4 slots remaining out of a total of 6 slots"
        );
    }

    #[tokio::test]
    async fn test_closing_an_event_blocks_new_reservations() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let id = create_event(&app, 10).await;

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/events/{id}/status"),
            Some(json!({"status": "closed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            "POST",
            "/api/event-reservations",
            Some(json!({
                "event_id": id,
                "full_name": "Late Arrival",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Event is closed for new reservations");
    }

    #[tokio::test]
    async fn test_update_event_revalidates_the_shift() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let id = create_event(&app, 10).await;

        let mut body = event_body(10);
        body["shift_name"] = json!("Z");

        let (status, body) = send(&app, "PUT", &format!("/api/events/{id}"), Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid shift selected");
    }

    #[tokio::test]
    async fn test_deleted_event_vanishes_from_the_surface() {
        let (app, db) = make_test_app().await;
        seed_shifts(&db).await;
        let id = create_event(&app, 10).await;

        let (status, _) = send(&app, "DELETE", &format!("/api/events/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", &format!("/api/events/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Event not found");

        let (_, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }
}
