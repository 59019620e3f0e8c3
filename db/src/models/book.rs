use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A catalog title. Physical units live in `book_copies`; `stock` is the
/// cached count of non-retired copies and is recomputed whenever a copy
/// changes state.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub book_title: String,
    pub author: Option<String>,
    pub category_id: i64,
    pub stock: i32,
    pub is_deleted: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    #[sea_orm(has_many = "super::book_copy::Entity")]
    Copies,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::book_copy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Copies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Looks a title up by id, treating soft-deleted rows as absent.
    pub async fn find_live(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::IsDeleted.eq(false))
            .one(db)
            .await
    }

    pub async fn find_all_live(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::IsDeleted.eq(false))
            .all(db)
            .await
    }

    pub async fn set_stock(db: &DbConn, id: i64, stock: i32) -> Result<Model, DbErr> {
        let book = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Book not found".into()))?;

        let mut active: ActiveModel = book.into();
        active.stock = Set(stock);
        active.update(db).await
    }

    pub async fn soft_delete(db: &DbConn, id: i64) -> Result<Model, DbErr> {
        let book = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Book not found".into()))?;

        let mut active: ActiveModel = book.into();
        active.is_deleted = Set(true);
        active.update(db).await
    }
}
