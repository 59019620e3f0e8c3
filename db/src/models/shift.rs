use chrono::NaiveTime;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;

/// A named daily time window. Every session booking and every event must
/// reference a row in this table by `shift_name`; an unknown name is a
/// validation failure upstream, never a silent default.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "shifts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub shift_name: String,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_name(db: &DbConn, shift_name: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ShiftName.eq(shift_name))
            .one(db)
            .await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }
}
