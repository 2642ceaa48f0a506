//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and coordinates in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a route between two freshly created stations.
///
/// # Returns
/// - `Ok((source, destination, route))` - The created stations and route
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_with_stations(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::station::Model,
        entity::station::Model,
        entity::route::Model,
    ),
    DbErr,
> {
    let source = crate::factory::station::create_station(db).await?;
    let destination = crate::factory::station::create_station(db).await?;
    let route = crate::factory::route::create_route(db, source.id, destination.id).await?;

    Ok((source, destination, route))
}

/// Creates a train together with a new train type.
///
/// # Returns
/// - `Ok((train_type, train))` - The created train type and train
/// - `Err(DbErr)` - Database error during creation
pub async fn create_train_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::train_type::Model, entity::train::Model), DbErr> {
    let train_type = crate::factory::train_type::create_train_type(db).await?;
    let train = crate::factory::train::create_train(db, train_type.id).await?;

    Ok((train_type, train))
}

/// Creates a journey with its full dependency chain.
///
/// Creates two stations, a route between them, a train type, a train (10 cargos of 20
/// places) and a journey on that route and train departing in one day.
///
/// # Returns
/// - `Ok((route, train, journey))` - The created route, train and journey
/// - `Err(DbErr)` - Database error during creation
pub async fn create_journey_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::route::Model,
        entity::train::Model,
        entity::journey::Model,
    ),
    DbErr,
> {
    let (_, _, route) = create_route_with_stations(db).await?;
    let (_, train) = create_train_with_type(db).await?;
    let journey = crate::factory::journey::create_journey(db, route.id, train.id).await?;

    Ok((route, train, journey))
}
