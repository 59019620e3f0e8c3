use crate::seed::Seeder;
use chrono::Utc;
use db::models::staff::{self, StaffShift, StaffStatus};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

pub struct StaffSeeder;

async fn insert_staff(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    employee_id: &str,
    shift: StaffShift,
    position: &str,
) {
    // Duplicate employee ids mean the row is already there.
    let _ = staff::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        employee_id: Set(employee_id.to_string()),
        shift: Set(shift),
        status: Set(StaffStatus::Active),
        position: Set(Some(position.to_string())),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await;
}

#[async_trait::async_trait]
impl Seeder for StaffSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed shift leads, one per shift
        insert_staff(db, "Sari Dewi", "sari@room19.id", "EMP0001", StaffShift::A, "Head Librarian").await;
        insert_staff(db, "Budi Santoso", "budi@room19.id", "EMP0002", StaffShift::B, "Librarian").await;
        insert_staff(db, "Tono Wijaya", "tono@room19.id", "EMP0003", StaffShift::C, "Librarian").await;

        // Random staff spread across the roster
        let shifts = [StaffShift::A, StaffShift::B, StaffShift::C];
        for n in 0..6 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let employee_id = format!("EMP{:04}", 100 + fastrand::u32(..9_900));
            insert_staff(db, &name, &email, &employee_id, shifts[n % 3], "Assistant").await;
        }
    }
}
