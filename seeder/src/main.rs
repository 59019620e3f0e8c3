use crate::seed::Seeder;
use crate::seed::run_seeder;
use crate::seeds::{
    book::BookSeeder, category::CategorySeeder, event::EventSeeder, shift::ShiftSeeder,
    staff::StaffSeeder,
};
use common::config::Config;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    Config::init(".env");
    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [
        (Box::new(ShiftSeeder) as Box<dyn Seeder + Send + Sync>, "Shift"),
        (Box::new(StaffSeeder), "Staff"),
        (Box::new(CategorySeeder), "Category"),
        (Box::new(BookSeeder), "Book"),
        (Box::new(EventSeeder), "Event"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
