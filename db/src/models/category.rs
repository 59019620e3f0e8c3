use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub category_name: String,
    /// Count of live (non-deleted) titles in this category. Maintained by the
    /// inventory service whenever titles are added or removed.
    pub number_of_items: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_name(db: &DbConn, name: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::CategoryName.eq(name))
            .one(db)
            .await
    }

    pub async fn set_item_count(db: &DbConn, id: i64, count: i32) -> Result<Model, DbErr> {
        let category = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound("Category not found".into()))?;

        let mut active: ActiveModel = category.into();
        active.number_of_items = Set(count);
        active.update(db).await
    }
}
