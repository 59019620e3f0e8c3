//! Daily staff attendance.
//!
//! Raw records are an append-only event log: one row per (staff, date,
//! status), resubmission only refreshes the timestamp. Everything the
//! dashboard shows is derived by folding one day's records; nothing derived
//! is persisted.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use db::models::attendance_record::{self, AttendanceStatus};
use db::models::staff::{self, StaffShift};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::clock;
use crate::error::ServiceError;

/// Canonical-status priority, highest first.
const STATUS_PRIORITY: [AttendanceStatus; 5] = [
    AttendanceStatus::ClockOut,
    AttendanceStatus::EarlyClockOut,
    AttendanceStatus::Present,
    AttendanceStatus::Late,
    AttendanceStatus::Absent,
];

/// Inside this many minutes before shift end, clock-out replaces early
/// clock-out. The two affordances never overlap.
pub const CLOCK_OUT_WINDOW_MINUTES: i64 = 15;

pub fn shift_window(shift: StaffShift) -> (NaiveTime, NaiveTime) {
    let hour = |h| NaiveTime::from_hms_opt(h, 0, 0).expect("hour in range");
    match shift {
        StaffShift::A => (hour(10), hour(14)),
        StaffShift::B => (hour(14), hour(18)),
        StaffShift::C => (hour(18), hour(22)),
    }
}

pub fn active_shift(hour: u32) -> Option<StaffShift> {
    match hour {
        10..=13 => Some(StaffShift::A),
        14..=17 => Some(StaffShift::B),
        18..=21 => Some(StaffShift::C),
        _ => None,
    }
}

pub fn is_in_shift(shift: StaffShift, hour: u32) -> bool {
    let (start, end) = shift_window(shift);
    hour >= start.hour() && hour < end.hour()
}

pub fn minutes_until_shift_end(shift: StaffShift, at: NaiveTime) -> i64 {
    let (_, end) = shift_window(shift);
    (end - at).num_minutes()
}

/// Clock-out is the end-of-shift action: offered from 15 minutes before the
/// window closes, and it stays offered once the window has passed.
pub fn clock_out_enabled(shift: StaffShift, at: NaiveTime) -> bool {
    minutes_until_shift_end(shift, at) <= CLOCK_OUT_WINDOW_MINUTES
}

pub fn early_clock_out_enabled(shift: StaffShift, at: NaiveTime) -> bool {
    !clock_out_enabled(shift, at)
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutMarker {
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

/// One staff member's day, derived from their raw records.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceOutcome {
    /// Canonical status, chosen by priority CO > ECO > P > L > A.
    pub status: AttendanceStatus,
    /// Latest timestamp seen for each status logged that day.
    pub latest: HashMap<AttendanceStatus, DateTime<Utc>>,
    /// Present when the day already contains a checkout; ECO wins over CO.
    pub early_checkout: Option<CheckoutMarker>,
}

/// Folds one day's records into per-staff outcomes.
///
/// Pure and order-independent: for each (staff, status) only the greatest
/// timestamp survives, so replayed or shuffled input yields the same map.
pub fn aggregate(records: &[attendance_record::Model]) -> HashMap<i64, AttendanceOutcome> {
    let mut latest_by_staff: HashMap<i64, HashMap<AttendanceStatus, DateTime<Utc>>> =
        HashMap::new();

    for record in records {
        let per_status = latest_by_staff.entry(record.staff_id).or_default();
        let entry = per_status.entry(record.status).or_insert(record.timestamp);
        if record.timestamp > *entry {
            *entry = record.timestamp;
        }
    }

    latest_by_staff
        .into_iter()
        .filter_map(|(staff_id, latest)| {
            let status = STATUS_PRIORITY
                .iter()
                .copied()
                .find(|s| latest.contains_key(s))?;

            let early_checkout = [AttendanceStatus::EarlyClockOut, AttendanceStatus::ClockOut]
                .iter()
                .find_map(|s| {
                    latest.get(s).map(|ts| CheckoutMarker {
                        status: *s,
                        timestamp: *ts,
                    })
                });

            Some((
                staff_id,
                AttendanceOutcome {
                    status,
                    latest,
                    early_checkout,
                },
            ))
        })
        .collect()
}

/// A staff member may leave early iff they are inside their shift window,
/// their canonical status says they checked in, and no checkout exists yet.
pub fn can_early_checkout(
    staff: &staff::Model,
    outcomes: &HashMap<i64, AttendanceOutcome>,
    hour: u32,
) -> bool {
    let Some(outcome) = outcomes.get(&staff.id) else {
        return false;
    };

    let checked_in = matches!(
        outcome.status,
        AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::Absent
    );

    is_in_shift(staff.shift, hour) && checked_in && outcome.early_checkout.is_none()
}

/// Active staff rostered on the shift that covers `hour`, name-sorted.
/// Outside all shift windows the floor is empty.
pub async fn current_shift_staff(
    db: &DatabaseConnection,
    hour: u32,
) -> Result<Vec<staff::Model>, ServiceError> {
    let Some(active) = active_shift(hour) else {
        return Ok(Vec::new());
    };

    let mut on_shift: Vec<staff::Model> = staff::Model::find_active(db)
        .await?
        .into_iter()
        .filter(|s| s.shift == active)
        .collect();
    on_shift.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(on_shift)
}

/// Records an attendance fact for the venue-local date of `timestamp`.
///
/// The staff reference may be the internal id or the employee code; neither
/// matching is a not-found error. Same-day resubmission of the same status
/// moves the timestamp instead of adding a row.
pub async fn record_attendance(
    db: &DatabaseConnection,
    staff_reference: &str,
    status: AttendanceStatus,
    timestamp: DateTime<Utc>,
    evidence_url: Option<String>,
) -> Result<attendance_record::Model, ServiceError> {
    let staff = staff::Model::find_by_reference(db, staff_reference)
        .await?
        .ok_or_else(|| ServiceError::not_found("Staff not found"))?;

    let date = clock::venue_date(timestamp);
    let record =
        attendance_record::Model::upsert(db, staff.id, date, status, timestamp, evidence_url)
            .await?;
    Ok(record)
}

#[derive(Debug, Serialize)]
pub struct AttendanceDashboard {
    pub staff: Vec<staff::Model>,
    pub outcomes: HashMap<i64, AttendanceOutcome>,
    pub active_shift: Option<StaffShift>,
    pub on_shift: Vec<staff::Model>,
}

/// The daily roster view: active staff (optionally name-filtered), their
/// folded outcomes for `date`, and who is on the floor at `hour`.
pub async fn dashboard(
    db: &DatabaseConnection,
    date: NaiveDate,
    hour: u32,
    search: Option<&str>,
) -> Result<AttendanceDashboard, ServiceError> {
    let mut staff = staff::Model::find_active(db).await?;
    if let Some(query) = search {
        let needle = query.to_lowercase();
        staff.retain(|s| s.name.to_lowercase().contains(&needle));
    }
    staff.sort_by(|a, b| a.name.cmp(&b.name));

    let records = attendance_record::Model::find_for_date(db, date).await?;
    let outcomes = aggregate(&records);

    let on_shift = current_shift_staff(db, hour).await?;

    Ok(AttendanceDashboard {
        staff,
        outcomes,
        active_shift: active_shift(hour),
        on_shift,
    })
}
