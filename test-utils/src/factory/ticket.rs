//! Ticket factory for creating test ticket entities.
//!
//! Inserts directly, bypassing seat range validation, so tests can set up any state.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ticket for the given seat slot under an existing order.
pub async fn create_ticket(
    db: &DatabaseConnection,
    order_id: i32,
    journey_id: i32,
    cargo: i32,
    seat: i32,
) -> Result<entity::ticket::Model, DbErr> {
    entity::ticket::ActiveModel {
        cargo: ActiveValue::Set(cargo),
        seat: ActiveValue::Set(seat),
        journey_id: ActiveValue::Set(journey_id),
        order_id: ActiveValue::Set(order_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
