use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

/// The venue operates on a fixed UTC+7 civil clock. Loan arithmetic and
/// "today" comparisons use this offset regardless of where the server runs.
pub const VENUE_UTC_OFFSET_HOURS: i32 = 7;

fn venue_offset() -> FixedOffset {
    FixedOffset::east_opt(VENUE_UTC_OFFSET_HOURS * 3600).expect("offset in range")
}

pub fn venue_now(now: DateTime<Utc>) -> DateTime<FixedOffset> {
    now.with_timezone(&venue_offset())
}

/// The civil date at the venue for a given instant.
pub fn venue_date(now: DateTime<Utc>) -> NaiveDate {
    venue_now(now).date_naive()
}

/// The wall-clock time at the venue for a given instant.
pub fn venue_time(now: DateTime<Utc>) -> NaiveTime {
    venue_now(now).time()
}
