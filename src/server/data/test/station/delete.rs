use super::*;

/// Tests deleting a station.
///
/// Verifies that routes starting or ending at the station are removed with it.
///
/// Expected: Ok(true), station and its routes gone
#[tokio::test]
async fn deletes_station_and_its_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (source, _, route) = factory::helpers::create_route_with_stations(db).await?;
    let other = factory::station::create_station(db).await?;
    let unrelated = factory::route::create_route(db, other.id, route.destination_id).await?;

    let repo = StationRepository::new(db);
    let deleted = repo.delete(source.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(source.id).await?.is_none());
    assert!(entity::prelude::Route::find_by_id(route.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Route::find_by_id(unrelated.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a station that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
