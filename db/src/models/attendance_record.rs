use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One attendance fact: a staff member reported `status` on `date`.
///
/// Rows are unique per (staff_id, date, status). Resubmitting the same status
/// on the same day moves the timestamp instead of inserting a duplicate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub staff_id: i64,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub evidence_url: Option<String>,
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "attendance_status")]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    /// Present: clocked in on time.
    #[sea_orm(string_value = "P")]
    #[serde(rename = "P")]
    #[strum(serialize = "P")]
    Present,

    /// Absent.
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    Absent,

    /// Late: clocked in after the shift started.
    #[sea_orm(string_value = "L")]
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Late,

    /// Clocked out at the end of the shift.
    #[sea_orm(string_value = "CO")]
    #[serde(rename = "CO")]
    #[strum(serialize = "CO")]
    ClockOut,

    /// Left before the shift window closed.
    #[sea_orm(string_value = "ECO")]
    #[serde(rename = "ECO")]
    #[strum(serialize = "ECO")]
    EarlyClockOut,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts the record, or refreshes the timestamp (and evidence) when the
    /// same (staff, date, status) row already exists.
    pub async fn upsert(
        db: &DbConn,
        staff_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
        timestamp: DateTime<Utc>,
        evidence_url: Option<String>,
    ) -> Result<Model, DbErr> {
        let existing = Entity::find()
            .filter(Column::StaffId.eq(staff_id))
            .filter(Column::Date.eq(date))
            .filter(Column::Status.eq(status))
            .one(db)
            .await?;

        match existing {
            Some(found) => {
                let mut active: ActiveModel = found.into();
                active.timestamp = Set(timestamp);
                if evidence_url.is_some() {
                    active.evidence_url = Set(evidence_url);
                }
                active.update(db).await
            }
            None => {
                let active = ActiveModel {
                    staff_id: Set(staff_id),
                    date: Set(date),
                    status: Set(status),
                    timestamp: Set(timestamp),
                    evidence_url: Set(evidence_url),
                    ..Default::default()
                };
                active.insert(db).await
            }
        }
    }

    pub async fn find_for_date(db: &DbConn, date: NaiveDate) -> Result<Vec<Model>, DbErr> {
        Entity::find().filter(Column::Date.eq(date)).all(db).await
    }

    pub async fn find_for_staff_on(
        db: &DbConn,
        staff_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StaffId.eq(staff_id))
            .filter(Column::Date.eq(date))
            .all(db)
            .await
    }
}
