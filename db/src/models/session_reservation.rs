use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DeriveActiveEnum;
use sea_orm::PaginatorTrait;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A study-session booking for one (arrival_date, shift) slot. A reservation
/// holds one slot regardless of group size; the optional group members count
/// only toward seat arithmetic.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "session_reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub category: String,
    pub arrival_date: NaiveDate,
    pub shift_name: String,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,

    pub full_name: String,
    pub group_member1: Option<String>,
    pub group_member2: Option<String>,
    pub group_member3: Option<String>,
    pub group_member4: Option<String>,

    pub status: ReservationStatus,
    pub cancellation_reason: Option<String>,

    pub payment_id: Option<String>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub amount: Option<i64>,

    pub created_at: DateTime<Utc>,
}

/// Closed status set shared by session and event reservations.
/// `attended` and `canceled` are terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "reservation_status")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReservationStatus {
    #[sea_orm(string_value = "not_attended")]
    NotAttended,

    #[sea_orm(string_value = "attended")]
    Attended,

    #[sea_orm(string_value = "canceled")]
    Canceled,
}

impl ReservationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Attended | ReservationStatus::Canceled)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Seats held by this booking: the holder plus every filled member slot.
    pub fn seats(&self) -> i64 {
        1 + [
            &self.group_member1,
            &self.group_member2,
            &self.group_member3,
            &self.group_member4,
        ]
        .iter()
        .filter(|m| m.is_some())
        .count() as i64
    }

    pub async fn find_by_payment_id(
        db: &DbConn,
        payment_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::PaymentId.eq(payment_id))
            .one(db)
            .await
    }

    /// Non-canceled bookings currently holding the (date, shift) slot.
    pub async fn count_active_for_slot(
        db: &DbConn,
        arrival_date: NaiveDate,
        shift_name: &str,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ArrivalDate.eq(arrival_date))
            .filter(Column::ShiftName.eq(shift_name))
            .filter(Column::Status.ne(ReservationStatus::Canceled))
            .count(db)
            .await
    }

    /// Seats taken across all non-canceled bookings of the slot.
    pub async fn seats_taken_for_slot(
        db: &DbConn,
        arrival_date: NaiveDate,
        shift_name: &str,
    ) -> Result<i64, DbErr> {
        let rows = Entity::find()
            .filter(Column::ArrivalDate.eq(arrival_date))
            .filter(Column::ShiftName.eq(shift_name))
            .filter(Column::Status.ne(ReservationStatus::Canceled))
            .all(db)
            .await?;

        Ok(rows.iter().map(Model::seats).sum())
    }
}
