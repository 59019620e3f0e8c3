use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607010001_create_shifts::Migration),
            Box::new(migrations::m202607010002_create_session_reservations::Migration),
            Box::new(migrations::m202607010003_create_events::Migration),
            Box::new(migrations::m202607010004_create_event_reservations::Migration),
            Box::new(migrations::m202607010005_create_staffs::Migration),
            Box::new(migrations::m202607010006_create_attendance_records::Migration),
            Box::new(migrations::m202607050001_create_categories::Migration),
            Box::new(migrations::m202607050002_create_books::Migration),
            Box::new(migrations::m202607050003_create_loans::Migration),
        ]
    }
}
