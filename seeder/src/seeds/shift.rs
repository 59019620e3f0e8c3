use crate::seed::Seeder;
use chrono::NaiveTime;
use db::models::shift;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

pub struct ShiftSeeder;

#[async_trait::async_trait]
impl Seeder for ShiftSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // The fixed venue roster: A 10-14, B 14-18, C 18-22.
        for (name, start, end) in [("A", 10, 14), ("B", 14, 18), ("C", 18, 22)] {
            if shift::Model::find_by_name(db, name)
                .await
                .unwrap()
                .is_some()
            {
                continue;
            }

            shift::ActiveModel {
                shift_name: Set(name.to_string()),
                shift_start: Set(NaiveTime::from_hms_opt(start, 0, 0).unwrap()),
                shift_end: Set(NaiveTime::from_hms_opt(end, 0, 0).unwrap()),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();
        }
    }
}
