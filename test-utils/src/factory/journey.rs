//! Journey factory for creating test journey entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test journeys with customizable schedule and crew.
pub struct JourneyFactory<'a> {
    db: &'a DatabaseConnection,
    route_id: i32,
    train_id: i32,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
    crew_ids: Vec<i32>,
}

impl<'a> JourneyFactory<'a> {
    /// Creates a new JourneyFactory departing in one day and arriving six hours later.
    pub fn new(db: &'a DatabaseConnection, route_id: i32, train_id: i32) -> Self {
        let departure_time = Utc::now() + Duration::days(1);
        Self {
            db,
            route_id,
            train_id,
            departure_time,
            arrival_time: departure_time + Duration::hours(6),
            crew_ids: Vec::new(),
        }
    }

    /// Sets departure and arrival times.
    pub fn schedule(mut self, departure_time: DateTime<Utc>, arrival_time: DateTime<Utc>) -> Self {
        self.departure_time = departure_time;
        self.arrival_time = arrival_time;
        self
    }

    /// Assigns crew members to the journey.
    pub fn crew(mut self, crew_ids: Vec<i32>) -> Self {
        self.crew_ids = crew_ids;
        self
    }

    /// Builds and inserts the journey and its crew assignments.
    pub async fn build(self) -> Result<entity::journey::Model, DbErr> {
        let journey = entity::journey::ActiveModel {
            route_id: ActiveValue::Set(self.route_id),
            train_id: ActiveValue::Set(self.train_id),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for crew_id in self.crew_ids {
            entity::journey_crew::ActiveModel {
                journey_id: ActiveValue::Set(journey.id),
                crew_id: ActiveValue::Set(crew_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(journey)
    }
}

/// Creates a journey with the default schedule and no crew.
pub async fn create_journey(
    db: &DatabaseConnection,
    route_id: i32,
    train_id: i32,
) -> Result<entity::journey::Model, DbErr> {
    JourneyFactory::new(db, route_id, train_id).build().await
}
