//! Train factory for creating test train entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trains with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let train = TrainFactory::new(&db, train_type.id)
///     .cargo_num(2)
///     .places_in_cargo(2)
///     .build()
///     .await?;
/// ```
pub struct TrainFactory<'a> {
    db: &'a DatabaseConnection,
    train_type_id: i32,
    name: String,
    cargo_num: i32,
    places_in_cargo: i32,
}

impl<'a> TrainFactory<'a> {
    /// Creates a new TrainFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Train {id}"`
    /// - cargo_num: `10`
    /// - places_in_cargo: `20`
    pub fn new(db: &'a DatabaseConnection, train_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            train_type_id,
            name: format!("Train {}", id),
            cargo_num: 10,
            places_in_cargo: 20,
        }
    }

    /// Sets the train name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the number of cargos (cars).
    pub fn cargo_num(mut self, cargo_num: i32) -> Self {
        self.cargo_num = cargo_num;
        self
    }

    /// Sets the number of seats per cargo.
    pub fn places_in_cargo(mut self, places_in_cargo: i32) -> Self {
        self.places_in_cargo = places_in_cargo;
        self
    }

    /// Builds and inserts the train entity into the database.
    pub async fn build(self) -> Result<entity::train::Model, DbErr> {
        entity::train::ActiveModel {
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            cargo_num: ActiveValue::Set(self.cargo_num),
            places_in_cargo: ActiveValue::Set(self.places_in_cargo),
            train_type_id: ActiveValue::Set(self.train_type_id),
            image: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a train with default values.
pub async fn create_train(
    db: &DatabaseConnection,
    train_type_id: i32,
) -> Result<entity::train::Model, DbErr> {
    TrainFactory::new(db, train_type_id).build().await
}
