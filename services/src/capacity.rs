//! Admission checks for session slots and event seats.
//!
//! Both checks re-derive occupancy from live non-canceled rows on every call;
//! nothing is cached. The count-then-insert sequence is not serialized, so two
//! concurrent admissions can race past the check. Slight over-admission is
//! tolerated here; see the capacity notes in DESIGN.md.

use chrono::NaiveDate;
use db::models::{event, event_reservation, session_reservation, shift};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::ServiceError;

/// Seat ceiling for one session shift, independent of the booking cap.
pub const MAX_SEATS_PER_SHIFT: i64 = 18;

/// Checks whether one more session booking fits into (date, shift).
///
/// Capacity counts bookings, not people: a group of five still consumes a
/// single booking slot. Returns the shift row so the caller can denormalize
/// its window into the reservation.
pub async fn admit_session(
    db: &DatabaseConnection,
    arrival_date: NaiveDate,
    shift_name: &str,
    max_bookings: u64,
) -> Result<shift::Model, ServiceError> {
    let shift = shift::Model::find_by_name(db, shift_name)
        .await?
        .ok_or_else(|| ServiceError::validation("Invalid shift selected"))?;

    let booked =
        session_reservation::Model::count_active_for_slot(db, arrival_date, shift_name).await?;
    if booked >= max_bookings {
        return Err(ServiceError::capacity(
            "Sorry, this shift is already fully booked. Please choose another shift or date.",
        ));
    }

    Ok(shift)
}

/// Checks whether a party of `1 + party_size` people fits into an event.
///
/// Seats are consumed per person: each reservation takes 1 plus its non-null
/// companions. Closed events refuse new admissions outright.
pub async fn admit_event(
    db: &DatabaseConnection,
    event_id: i64,
    party_size: i64,
) -> Result<event::Model, ServiceError> {
    let event = event::Model::find_live(db, event_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event not found"))?;

    if event.status == event::EventStatus::Closed {
        return Err(ServiceError::validation(
            "Event is closed for new reservations",
        ));
    }

    let taken = event_reservation::Model::seats_taken_for_event(db, event_id).await?;
    let requested = 1 + party_size;
    if taken + requested > i64::from(event.max_participants) {
        return Err(ServiceError::capacity("Event is fully booked"));
    }

    Ok(event)
}

#[derive(Debug, Serialize)]
pub struct SlotAvailability {
    pub available: bool,
    pub current_people: i64,
    pub available_slots: i64,
    pub max_people: i64,
    pub message: String,
}

/// Seat-level availability report for a session slot, for the booking form.
/// This is advisory; [`admit_session`] remains the authoritative gate.
pub async fn session_availability(
    db: &DatabaseConnection,
    arrival_date: NaiveDate,
    shift_name: &str,
    requested_seats: i64,
) -> Result<SlotAvailability, ServiceError> {
    let current_people =
        session_reservation::Model::seats_taken_for_slot(db, arrival_date, shift_name).await?;
    let available_slots = MAX_SEATS_PER_SHIFT - current_people;
    let available = available_slots >= requested_seats;

    let message = if available {
        format!("Available {available_slots} slots out of a total of {MAX_SEATS_PER_SHIFT} slots")
    } else {
        format!(
            "Sorry, only {available_slots} slots remaining out of a total of {MAX_SEATS_PER_SHIFT} slots"
        )
    };

    Ok(SlotAvailability {
        available,
        current_people,
        available_slots,
        max_people: MAX_SEATS_PER_SHIFT,
        message,
    })
}

#[derive(Debug, Serialize)]
pub struct EventAvailability {
    pub available: bool,
    pub current_participants: i64,
    pub available_slots: i64,
    pub max_participants: i32,
    pub message: String,
}

/// Seat-level availability report for an event, same advisory role as
/// [`session_availability`].
pub async fn event_availability(
    db: &DatabaseConnection,
    event_id: i64,
    requested_seats: i64,
) -> Result<EventAvailability, ServiceError> {
    let event = event::Model::find_live(db, event_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event not found"))?;

    let current_participants = event_reservation::Model::seats_taken_for_event(db, event_id).await?;
    let available_slots = i64::from(event.max_participants) - current_participants;
    let available = available_slots >= requested_seats;

    let max = event.max_participants;
    let message = if available {
        format!("Available {available_slots} slots out of a total of {max} slots")
    } else {
        format!("Sorry, only {available_slots} slots remaining out of a total of {max} slots")
    };

    Ok(EventAvailability {
        available,
        current_participants,
        available_slots,
        max_participants: max,
        message,
    })
}
