use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A borrowing record for up to two titles at once. The due date starts one
/// week after `loan_start` and moves only through the extension flow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "loans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub book_id1: i64,
    pub book_id2: Option<i64>,
    pub book_title1: String,
    pub book_title2: Option<String>,

    pub full_name: String,
    pub email: String,
    pub phone_number: String,

    pub loan_start: NaiveDate,
    pub loan_due: NaiveDate,

    pub status: LoanStatus,
    /// An unpaid late fee is attached to the loan. Cleared by a settled
    /// payment, never by the overdue sweep.
    pub fine: bool,
    pub extend_count: i32,
    pub payment_id: Option<String>,

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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "loan_status")]
#[strum(ascii_case_insensitive)]
pub enum LoanStatus {
    #[sea_orm(string_value = "On Going")]
    #[serde(rename = "On Going")]
    #[strum(serialize = "On Going")]
    OnGoing,

    #[sea_orm(string_value = "Over Due")]
    #[serde(rename = "Over Due")]
    #[strum(serialize = "Over Due")]
    OverDue,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId1",
        to = "super::book::Column::Id"
    )]
    FirstBook,

    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId2",
        to = "super::book::Column::Id"
    )]
    SecondBook,

    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
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

    pub async fn find_overdue_candidates(
        db: &DbConn,
        today: NaiveDate,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(LoanStatus::OnGoing))
            .filter(Column::LoanDue.lt(today))
            .all(db)
            .await
    }
}
