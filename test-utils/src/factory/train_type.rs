//! Train type factory for creating test train type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a train type named `"Type {id}"`.
pub async fn create_train_type(db: &DatabaseConnection) -> Result<entity::train_type::Model, DbErr> {
    create_train_type_named(db, format!("Type {}", next_id())).await
}

/// Creates a train type with a specific name.
pub async fn create_train_type_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::train_type::Model, DbErr> {
    entity::train_type::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
