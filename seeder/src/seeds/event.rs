use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::event;
use sea_orm::DatabaseConnection;
use services::reservation::{self, EventInput};

pub struct EventSeeder;

#[async_trait::async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        if !event::Model::find_all_live(db).await.unwrap().is_empty() {
            return;
        }

        let today = Utc::now().date_naive();
        let upcoming = [
            ("Storytelling Afternoon", "Read-aloud session for kids", 7, "B", 20, 0),
            ("Author Meet & Greet", "Q&A with a local novelist", 14, "C", 30, 25_000),
            ("Weekend Book Swap", "Bring one, take one", 21, "A", 15, 0),
        ];

        for (name, description, days_out, shift, capacity, fee) in upcoming {
            reservation::create_event(
                db,
                EventInput {
                    event_name: name.to_string(),
                    description: description.to_string(),
                    event_date: today + Duration::days(days_out),
                    shift_name: shift.to_string(),
                    max_participants: capacity,
                    ticket_fee: fee,
                    additional_notes: None,
                },
                Utc::now(),
            )
            .await
            .unwrap();
        }
    }
}
