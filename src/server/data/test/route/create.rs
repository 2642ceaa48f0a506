use super::*;

/// Tests creating routes in both directions between two stations.
///
/// Verifies that A→B and B→A are distinct routes and that both are returned with their
/// stations attached.
///
/// Expected: Ok for both directions
#[tokio::test]
async fn creates_routes_in_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::station::StationFactory::new(db)
        .name("A")
        .coordinates(11.11, 22.22)
        .build()
        .await?;
    let b = factory::station::StationFactory::new(db)
        .name("B")
        .coordinates(33.33, 44.44)
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let forward = repo
        .create(RouteParams {
            source_id: a.id,
            destination_id: b.id,
            distance: 540,
        })
        .await?;
    let backward = repo
        .create(RouteParams {
            source_id: b.id,
            destination_id: a.id,
            distance: 540,
        })
        .await?;

    assert_eq!(forward.label(), "A -> B");
    assert_eq!(backward.label(), "B -> A");
    assert_eq!(forward.distance, 540);
    assert_eq!(backward.source.latitude, 33.33);

    Ok(())
}

/// Tests that the same endpoint pair cannot be stored twice.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_endpoints() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (source, destination, _) = factory::helpers::create_route_with_stations(db).await?;

    let repo = RouteRepository::new(db);
    let result = repo
        .create(RouteParams {
            source_id: source.id,
            destination_id: destination.id,
            distance: 10,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests creating a route that references a missing station.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_unknown_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = factory::station::create_station(db).await?;

    let repo = RouteRepository::new(db);
    let result = repo
        .create(RouteParams {
            source_id: source.id,
            destination_id: 999,
            distance: 10,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
