//! Crew factory for creating test crew entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a crew member named `"Test Crew{id}"`.
pub async fn create_crew(db: &DatabaseConnection) -> Result<entity::crew::Model, DbErr> {
    create_crew_named(db, "Test", format!("Crew{}", next_id())).await
}

/// Creates a crew member with specific names.
pub async fn create_crew_named(
    db: &DatabaseConnection,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
) -> Result<entity::crew::Model, DbErr> {
    entity::crew::ActiveModel {
        first_name: ActiveValue::Set(first_name.into()),
        last_name: ActiveValue::Set(last_name.into()),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
