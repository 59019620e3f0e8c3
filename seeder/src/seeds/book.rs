use crate::seed::Seeder;
use db::models::{book, category};
use sea_orm::DatabaseConnection;
use services::inventory::{self, NewBook};

pub struct BookSeeder;

const TITLES: [(&str, &str, &str); 6] = [
    ("Laskar Pelangi", "Andrea Hirata", "Fiction"),
    ("Bumi Manusia", "Pramoedya Ananta Toer", "Fiction"),
    ("Atomic Habits", "James Clear", "Non-fiction"),
    ("Sapiens", "Yuval Noah Harari", "Non-fiction"),
    ("Si Kancil", "Folk Tales", "Children"),
    ("National Geographic 2024", "Various", "Periodicals"),
];

#[async_trait::async_trait]
impl Seeder for BookSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Titles are not unique, so only seed into an empty catalog.
        if !book::Model::find_all_live(db).await.unwrap().is_empty() {
            return;
        }

        for (title, author, category_name) in TITLES {
            let cat = category::Model::find_by_name(db, category_name)
                .await
                .unwrap()
                .expect("Categories are seeded first");

            inventory::create_book(
                db,
                NewBook {
                    book_title: title.to_string(),
                    author: Some(author.to_string()),
                    category_id: cat.id,
                    copies: fastrand::i32(2..=4),
                    handled_by: Some("Sari Dewi".to_string()),
                },
            )
            .await
            .unwrap();
        }
    }
}
