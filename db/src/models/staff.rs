use chrono::{DateTime, Utc};
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A staff member on the daily shift roster. Only `active` staff participate
/// in shift and attendance computation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "staffs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub email: String,
    /// External staff code, e.g. badge number. Unique.
    pub employee_id: String,

    pub shift: StaffShift,
    pub status: StaffStatus,
    pub position: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "staff_shift")]
#[strum(ascii_case_insensitive)]
pub enum StaffShift {
    #[sea_orm(string_value = "A")]
    A,

    #[sea_orm(string_value = "B")]
    B,

    #[sea_orm(string_value = "C")]
    C,
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
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "staff_status")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StaffStatus {
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "non_active")]
    NonActive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Resolves a staff reference the way submission forms send it: the
    /// internal id first, then the external employee code.
    pub async fn find_by_reference(db: &DbConn, reference: &str) -> Result<Option<Model>, DbErr> {
        if let Ok(id) = reference.parse::<i64>() {
            if let Some(found) = Entity::find_by_id(id).one(db).await? {
                return Ok(Some(found));
            }
        }

        Entity::find()
            .filter(Column::EmployeeId.eq(reference))
            .one(db)
            .await
    }

    pub async fn find_active(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(StaffStatus::Active))
            .all(db)
            .await
    }
}
