use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A scheduled event occupying one shift on one date. Events are soft-deleted
/// only; `status` gates new admissions and never touches existing
/// reservations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub event_name: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub shift_name: String,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,

    pub max_participants: i32,
    pub ticket_fee: i64,
    pub additional_notes: Option<String>,

    pub status: EventStatus,
    pub is_deleted: bool,

    pub created_at: DateTime<Utc>,
}

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
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "event_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EventStatus {
    #[sea_orm(string_value = "open")]
    Open,

    #[sea_orm(string_value = "closed")]
    Closed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_reservation::Entity")]
    Reservations,
}

impl Related<super::event_reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Live events only; soft-deleted rows behave as absent.
    pub async fn find_live(db: &DbConn, event_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(event_id)
            .filter(Column::IsDeleted.eq(false))
            .one(db)
            .await
    }

    pub async fn find_all_live(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn set_status(
        db: &DbConn,
        event_id: i64,
        status: EventStatus,
    ) -> Result<Model, DbErr> {
        let model = Self::find_live(db, event_id).await?;

        let model = match model {
            Some(m) => m,
            None => return Err(DbErr::RecordNotFound("Event not found".to_string())),
        };

        let mut active_model: ActiveModel = model.into();
        active_model.status = Set(status);
        active_model.update(db).await
    }

    pub async fn soft_delete(db: &DbConn, event_id: i64) -> Result<Model, DbErr> {
        let model = Self::find_live(db, event_id).await?;

        let model = match model {
            Some(m) => m,
            None => return Err(DbErr::RecordNotFound("Event not found".to_string())),
        };

        let mut active_model: ActiveModel = model.into();
        active_model.is_deleted = Set(true);
        active_model.update(db).await
    }
}
