//! Station factory for creating test station entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
///
/// Default coordinates are derived from the unique counter so that stations created
/// with defaults never collide on the (latitude, longitude) unique index.
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Station {}", id),
            latitude: id as f64 / 1000.0,
            longitude: id as f64 / 1000.0,
        }
    }

    /// Sets the station name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets both coordinates.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Builds and inserts the station entity into the database.
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station with default values.
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).build().await
}

/// Creates a station with a specific name.
pub async fn create_station_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).name(name).build().await
}
