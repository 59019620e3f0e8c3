use sea_orm::PaginatorTrait;
use sea_orm::QueryFilter;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A physical unit of a title. Retired copies stay on record for the audit
/// trail but no longer count toward stock.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "book_copies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub book_id: i64,
    pub copy_number: i32,
    pub condition: String,
    pub comment: Option<String>,
    pub is_retired: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_for_book(db: &DbConn, book_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::BookId.eq(book_id))
            .order_by_asc(Column::CopyNumber)
            .all(db)
            .await
    }

    pub async fn count_active_for_book(db: &DbConn, book_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::BookId.eq(book_id))
            .filter(Column::IsRetired.eq(false))
            .count(db)
            .await
    }

    pub async fn next_copy_number(db: &DbConn, book_id: i64) -> Result<i32, DbErr> {
        let copies = Self::find_for_book(db, book_id).await?;
        Ok(copies.iter().map(|c| c.copy_number).max().unwrap_or(0) + 1)
    }
}
