use super::*;

/// Tests overwriting a route's destination and distance.
///
/// Expected: Ok with the new destination station attached
#[tokio::test]
async fn overwrites_route() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (source, _, route) = factory::helpers::create_route_with_stations(db).await?;
    let other = factory::station::create_station_named(db, "Uzhhorod").await?;

    let repo = RouteRepository::new(db);
    let updated = repo
        .update(
            route.id,
            RouteParams {
                source_id: source.id,
                destination_id: other.id,
                distance: 800,
            },
        )
        .await?;

    assert_eq!(updated.id, route.id);
    assert_eq!(updated.destination.name, "Uzhhorod");
    assert_eq!(updated.distance, 800);

    Ok(())
}
