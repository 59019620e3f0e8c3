//! Reservation lifecycles for reading sessions and events, plus the event
//! entity itself.
//!
//! Status machines are small and closed: reservations move between
//! not_attended, attended and canceled, where attended and canceled are
//! terminal; events toggle between open and closed. Replaying a transition a
//! reservation is already in is accepted and changes nothing.

use chrono::{DateTime, NaiveDate, Utc};
use db::models::session_reservation::ReservationStatus;
use db::models::{event, event_reservation, session_reservation, shift};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::capacity;
use crate::error::ServiceError;

fn check(input: &impl Validate) -> Result<(), ServiceError> {
    input
        .validate()
        .map_err(|errs| ServiceError::Validation(common::format_validation_errors(&errs)))
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSessionReservation {
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub arrival_date: NaiveDate,
    #[validate(length(min = 1, message = "Shift name is required"))]
    pub shift_name: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Confirmation recipient. Not persisted; the booking itself is anonymous
    /// beyond the visitor's name.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 4, message = "At most four companions are allowed"))]
    pub members: Vec<String>,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<i64>,
}

/// Books a session slot: validates the request, admits it against the
/// two-bookings-per-slot cap and persists it as not_attended with the shift
/// window denormalized in.
///
/// Payment callbacks can replay the same booking; a reservation that already
/// carries the same payment_id is returned as-is instead of being duplicated.
pub async fn create_session_reservation(
    db: &DatabaseConnection,
    input: NewSessionReservation,
    max_bookings: u64,
    now: DateTime<Utc>,
) -> Result<session_reservation::Model, ServiceError> {
    check(&input)?;
    if input.category == "group" && input.members.is_empty() {
        return Err(ServiceError::validation(
            "At least one group member is required",
        ));
    }

    if let Some(payment_id) = input.payment_id.as_deref() {
        if let Some(existing) =
            session_reservation::Model::find_by_payment_id(db, payment_id).await?
        {
            return Ok(existing);
        }
    }

    let shift =
        capacity::admit_session(db, input.arrival_date, &input.shift_name, max_bookings).await?;

    let NewSessionReservation {
        category,
        arrival_date,
        shift_name,
        full_name,
        email: _,
        members,
        payment_id,
        payment_status,
        payment_method,
        amount,
    } = input;
    let mut slots = members.into_iter();

    let created = session_reservation::ActiveModel {
        category: Set(category),
        arrival_date: Set(arrival_date),
        shift_name: Set(shift_name),
        shift_start: Set(shift.shift_start),
        shift_end: Set(shift.shift_end),
        full_name: Set(full_name),
        group_member1: Set(slots.next()),
        group_member2: Set(slots.next()),
        group_member3: Set(slots.next()),
        group_member4: Set(slots.next()),
        status: Set(ReservationStatus::NotAttended),
        cancellation_reason: Set(None),
        payment_id: Set(payment_id),
        payment_status: Set(payment_status),
        payment_method: Set(payment_method),
        amount: Set(amount),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

#[derive(Debug, Serialize)]
pub struct SessionTransition {
    pub reservation: session_reservation::Model,
    /// Seats freed by a cancellation. Informational only: admission always
    /// re-derives occupancy from live rows, so nothing else decrements.
    pub slots_returned: i64,
}

/// Moves a session reservation to `new_status`.
///
/// Same-status replays return the stored row untouched (a second cancel does
/// not rewrite cancellation_reason). A terminal reservation refuses any other
/// target. Canceling stores `reason`, defaulting to an empty string.
pub async fn transition_session(
    db: &DatabaseConnection,
    id: i64,
    new_status: ReservationStatus,
    reason: Option<String>,
) -> Result<SessionTransition, ServiceError> {
    let current = session_reservation::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Reservation not found"))?;

    if current.status == new_status {
        return Ok(SessionTransition {
            reservation: current,
            slots_returned: 0,
        });
    }

    if current.status.is_terminal() {
        return Err(ServiceError::validation(format!(
            "Reservation is already {}",
            current.status
        )));
    }

    let slots_returned = if new_status == ReservationStatus::Canceled {
        current.seats()
    } else {
        0
    };

    let mut active: session_reservation::ActiveModel = current.into();
    active.status = Set(new_status);
    if new_status == ReservationStatus::Canceled {
        active.cancellation_reason = Set(Some(reason.unwrap_or_default()));
    }
    let updated = active.update(db).await?;

    Ok(SessionTransition {
        reservation: updated,
        slots_returned,
    })
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEventReservation {
    pub event_id: i64,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[serde(default)]
    #[validate(length(max = 4, message = "At most four companions are allowed"))]
    pub members: Vec<String>,
    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<i64>,
}

/// Admits a party against the event's seat capacity and persists the
/// reservation. Duplicate payment callbacks collapse onto the first row.
pub async fn create_event_reservation(
    db: &DatabaseConnection,
    input: NewEventReservation,
    now: DateTime<Utc>,
) -> Result<event_reservation::Model, ServiceError> {
    check(&input)?;

    if let Some(payment_id) = input.payment_id.as_deref() {
        if let Some(existing) = event_reservation::Model::find_by_payment_id(db, payment_id).await?
        {
            return Ok(existing);
        }
    }

    let event = capacity::admit_event(db, input.event_id, input.members.len() as i64).await?;

    let NewEventReservation {
        full_name,
        members,
        payment_id,
        payment_status,
        payment_method,
        amount,
        ..
    } = input;
    let mut slots = members.into_iter();

    let created = event_reservation::ActiveModel {
        event_id: Set(event.id),
        full_name: Set(full_name),
        group_member1: Set(slots.next()),
        group_member2: Set(slots.next()),
        group_member3: Set(slots.next()),
        group_member4: Set(slots.next()),
        status: Set(ReservationStatus::NotAttended),
        cancellation_reason: Set(None),
        payment_id: Set(payment_id),
        payment_status: Set(payment_status),
        payment_method: Set(payment_method),
        amount: Set(amount),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

#[derive(Debug, Serialize)]
pub struct EventReservationTransition {
    pub reservation: event_reservation::Model,
    pub slots_returned: i64,
}

pub async fn transition_event_reservation(
    db: &DatabaseConnection,
    id: i64,
    new_status: ReservationStatus,
    reason: Option<String>,
) -> Result<EventReservationTransition, ServiceError> {
    let current = event_reservation::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Reservation not found"))?;

    if current.status == new_status {
        return Ok(EventReservationTransition {
            reservation: current,
            slots_returned: 0,
        });
    }

    if current.status.is_terminal() {
        return Err(ServiceError::validation(format!(
            "Reservation is already {}",
            current.status
        )));
    }

    let slots_returned = if new_status == ReservationStatus::Canceled {
        current.seats()
    } else {
        0
    };

    let mut active: event_reservation::ActiveModel = current.into();
    active.status = Set(new_status);
    if new_status == ReservationStatus::Canceled {
        active.cancellation_reason = Set(Some(reason.unwrap_or_default()));
    }
    let updated = active.update(db).await?;

    Ok(EventReservationTransition {
        reservation: updated,
        slots_returned,
    })
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub event_name: String,
    pub description: String,
    pub event_date: NaiveDate,
    #[validate(length(min = 1, message = "Shift name is required"))]
    pub shift_name: String,
    #[validate(range(min = 1, message = "Capacity must be at least one"))]
    pub max_participants: i32,
    #[validate(range(min = 0, message = "Ticket fee cannot be negative"))]
    pub ticket_fee: i64,
    pub additional_notes: Option<String>,
}

pub async fn create_event(
    db: &DatabaseConnection,
    input: EventInput,
    now: DateTime<Utc>,
) -> Result<event::Model, ServiceError> {
    check(&input)?;

    let shift = shift::Model::find_by_name(db, &input.shift_name)
        .await?
        .ok_or_else(|| ServiceError::validation("Invalid shift selected"))?;

    let created = event::ActiveModel {
        event_name: Set(input.event_name),
        description: Set(input.description),
        event_date: Set(input.event_date),
        shift_name: Set(input.shift_name),
        shift_start: Set(shift.shift_start),
        shift_end: Set(shift.shift_end),
        max_participants: Set(input.max_participants),
        ticket_fee: Set(input.ticket_fee),
        additional_notes: Set(input.additional_notes),
        status: Set(event::EventStatus::Open),
        is_deleted: Set(false),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created)
}

/// Full-row update; the named shift is re-resolved so the stored window
/// stays in step with the shift catalog.
pub async fn update_event(
    db: &DatabaseConnection,
    id: i64,
    input: EventInput,
) -> Result<event::Model, ServiceError> {
    check(&input)?;

    let current = event::Model::find_live(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event not found"))?;

    let shift = shift::Model::find_by_name(db, &input.shift_name)
        .await?
        .ok_or_else(|| ServiceError::validation("Invalid shift selected"))?;

    let mut active: event::ActiveModel = current.into();
    active.event_name = Set(input.event_name);
    active.description = Set(input.description);
    active.event_date = Set(input.event_date);
    active.shift_name = Set(input.shift_name);
    active.shift_start = Set(shift.shift_start);
    active.shift_end = Set(shift.shift_end);
    active.max_participants = Set(input.max_participants);
    active.ticket_fee = Set(input.ticket_fee);
    active.additional_notes = Set(input.additional_notes);
    let updated = active.update(db).await?;

    Ok(updated)
}

/// Opens or closes an event for new admissions. Existing reservations are
/// never touched by this switch.
pub async fn set_event_status(
    db: &DatabaseConnection,
    id: i64,
    status: event::EventStatus,
) -> Result<event::Model, ServiceError> {
    let updated = event::Model::set_status(db, id, status).await?;
    Ok(updated)
}

pub async fn delete_event(db: &DatabaseConnection, id: i64) -> Result<(), ServiceError> {
    event::Model::soft_delete(db, id).await?;
    Ok(())
}

pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    Ok(event::Model::find_all_live(db).await?)
}

pub async fn get_event(db: &DatabaseConnection, id: i64) -> Result<event::Model, ServiceError> {
    event::Model::find_live(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event not found"))
}

pub async fn list_session_reservations(
    db: &DatabaseConnection,
) -> Result<Vec<session_reservation::Model>, ServiceError> {
    Ok(session_reservation::Entity::find()
        .order_by_desc(session_reservation::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn get_session_reservation(
    db: &DatabaseConnection,
    id: i64,
) -> Result<session_reservation::Model, ServiceError> {
    session_reservation::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Reservation not found"))
}

pub async fn list_event_reservations(
    db: &DatabaseConnection,
    event_id: i64,
) -> Result<Vec<event_reservation::Model>, ServiceError> {
    Ok(event_reservation::Model::find_for_event(db, event_id).await?)
}

pub async fn list_all_event_reservations(
    db: &DatabaseConnection,
) -> Result<Vec<event_reservation::Model>, ServiceError> {
    Ok(event_reservation::Entity::find()
        .order_by_desc(event_reservation::Column::CreatedAt)
        .all(db)
        .await?)
}
