//! Order factory for creating test order entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order for the user, stamped with the current time.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    create_order_at(db, user_id, Utc::now()).await
}

/// Creates an order for the user with a specific creation timestamp.
pub async fn create_order_at(
    db: &DatabaseConnection,
    user_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::order::Model, DbErr> {
    entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
