use chrono::{DateTime, Utc};
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A settled payment-gateway notification tied to a loan. `payment_id` is the
/// gateway order id and is unique, so replayed callbacks collapse onto the
/// first row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub loan_id: i64,
    pub payment_id: String,
    pub payment_status: String,
    pub payment_method: String,
    pub amount: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::loan::Entity",
        from = "Column::LoanId",
        to = "super::loan::Column::Id"
    )]
    Loan,
}

impl Related<super::loan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_payment_id(db: &DbConn, payment_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::PaymentId.eq(payment_id))
            .one(db)
            .await
    }

    pub async fn find_for_loan(db: &DbConn, loan_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::LoanId.eq(loan_id))
            .all(db)
            .await
    }
}
