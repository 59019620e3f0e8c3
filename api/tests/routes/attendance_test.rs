#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use axum::http::StatusCode;
    use db::models::attendance_record::{AttendanceStatus, Entity as RecordEntity};
    use db::models::staff::StaffShift;
    use sea_orm::EntityTrait;
    use serde_json::json;

    use crate::helpers::app::{make_test_app, send};
    use crate::helpers::data::seed_staff_member;

    // 03:00 UTC is 10:00 at the venue, the start of shift A.
    const CLOCK_IN: &str = "2026-03-14T03:00:00Z";

    #[tokio::test]
    async fn test_record_attendance_by_employee_code() {
        let (app, db) = make_test_app().await;
        let staff = seed_staff_member(&db, "Sari", "EMP-1", StaffShift::A).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/attendance/records",
            Some(json!({
                "staff_reference": "EMP-1",
                "status": "P",
                "timestamp": CLOCK_IN,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Attendance recorded successfully");

        let rows = RecordEntity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].staff_id, staff.id);
        assert_eq!(rows[0].status, AttendanceStatus::Present);
        assert_eq!(rows[0].date.to_string(), "2026-03-14");
    }

    #[tokio::test]
    async fn test_same_day_resubmission_moves_the_timestamp() {
        let (app, db) = make_test_app().await;
        seed_staff_member(&db, "Sari", "EMP-1", StaffShift::A).await;

        for timestamp in [CLOCK_IN, "2026-03-14T03:45:00Z"] {
            let (status, _) = send(
                &app,
                "POST",
                "/api/attendance/records",
                Some(json!({
                    "staff_reference": "EMP-1",
                    "status": "P",
                    "timestamp": timestamp,
                })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let rows = RecordEntity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].timestamp.to_rfc3339(), "2026-03-14T03:45:00+00:00");
    }

    #[tokio::test]
    async fn test_unknown_staff_is_not_found() {
        let (app, _db) = make_test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/attendance/records",
            Some(json!({
                "staff_reference": "EMP-404",
                "status": "P",
                "timestamp": CLOCK_IN,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Staff not found");
    }

    #[tokio::test]
    async fn test_unknown_attendance_status_is_rejected() {
        let (app, db) = make_test_app().await;
        seed_staff_member(&db, "Sari", "EMP-1", StaffShift::A).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/attendance/records",
            Some(json!({
                "staff_reference": "EMP-1",
                "status": "XX",
                "timestamp": CLOCK_IN,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Unknown attendance status 'XX'");
    }

    #[tokio::test]
    async fn test_dashboard_folds_the_day() {
        let (app, db) = make_test_app().await;
        let sari = seed_staff_member(&db, "Sari", "EMP-1", StaffShift::A).await;
        seed_staff_member(&db, "Budi", "EMP-2", StaffShift::B).await;

        send(
            &app,
            "POST",
            "/api/attendance/records",
            Some(json!({
                "staff_reference": "EMP-1",
                "status": "P",
                "timestamp": CLOCK_IN,
            })),
        )
        .await;

        let (status, body) = send(
            &app,
            "GET",
            "/api/attendance/dashboard?date=2026-03-14&hour=11",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["staff"].as_array().unwrap().len(), 2);
        assert_eq!(data["active_shift"], "A");
        assert_eq!(data["outcomes"][sari.id.to_string()]["status"], "P");

        // Only the shift-A member is on the floor at 11:00.
        let on_shift = data["on_shift"].as_array().unwrap();
        assert_eq!(on_shift.len(), 1);
        assert_eq!(on_shift[0]["name"], "Sari");

        // The search filter narrows the roster.
        let (_, body) = send(
            &app,
            "GET",
            "/api/attendance/dashboard?date=2026-03-14&hour=11&search=bud",
            None,
        )
        .await;
        let staff = body["data"]["staff"].as_array().unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0]["name"], "Budi");
    }

    #[tokio::test]
    async fn test_staff_on_shift_endpoint_respects_the_hour() {
        let (app, db) = make_test_app().await;
        seed_staff_member(&db, "Sari", "EMP-1", StaffShift::A).await;
        seed_staff_member(&db, "Budi", "EMP-2", StaffShift::C).await;

        let (status, body) = send(&app, "GET", "/api/staff/on-shift?hour=19", None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Budi");

        // Before opening nobody is on the floor.
        let (_, body) = send(&app, "GET", "/api/staff/on-shift?hour=8", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }
}
