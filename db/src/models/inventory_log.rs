use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Append-only stock movement journal. One row per mutation, carrying the
/// stock level on both sides of the change.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "inventory_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Movement kind, e.g. "add", "retire", "delete".
    pub mode: String,
    pub item_name: String,
    pub stock_before: i32,
    pub stock_after: i32,
    pub comment: Option<String>,
    pub handled_by: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn record(
        db: &DbConn,
        mode: &str,
        item_name: &str,
        stock_before: i32,
        stock_after: i32,
        comment: Option<String>,
        handled_by: Option<String>,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            mode: Set(mode.to_string()),
            item_name: Set(item_name.to_string()),
            stock_before: Set(stock_before),
            stock_after: Set(stock_after),
            comment: Set(comment),
            handled_by: Set(handled_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }
}
