use chrono::{DateTime, Utc};
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

pub use super::session_reservation::ReservationStatus;

/// A booking against a specific event. Unlike session bookings, every filled
/// member slot consumes one seat of the event's `max_participants`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "event_reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub event_id: i64,

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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

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

    pub async fn find_for_event(db: &DbConn, event_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .all(db)
            .await
    }

    /// Seats taken across all non-canceled reservations of the event.
    pub async fn seats_taken_for_event(db: &DbConn, event_id: i64) -> Result<i64, DbErr> {
        let rows = Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::Status.ne(ReservationStatus::Canceled))
            .all(db)
            .await?;

        Ok(rows.iter().map(Model::seats).sum())
    }
}
