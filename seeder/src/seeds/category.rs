use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::inventory;

pub const CATEGORIES: [&str; 5] = [
    "Fiction",
    "Non-fiction",
    "Children",
    "Reference",
    "Periodicals",
];

pub struct CategorySeeder;

#[async_trait::async_trait]
impl Seeder for CategorySeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        for name in CATEGORIES {
            // Rejected as a duplicate on re-runs.
            let _ = inventory::create_category(db, name).await;
        }
    }
}
