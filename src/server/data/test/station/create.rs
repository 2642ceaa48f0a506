use super::*;

/// Tests creating a station.
///
/// Verifies that the repository stores the name and both coordinates and returns the
/// created station with its generated id.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo
        .create(StationParams {
            name: "Kyiv".to_string(),
            latitude: 50.45,
            longitude: 30.52,
        })
        .await?;

    assert!(station.id > 0);
    assert_eq!(station.name, "Kyiv");
    assert_eq!(station.latitude, 50.45);
    assert_eq!(station.longitude, 30.52);

    Ok(())
}

/// Tests that two stations cannot share a coordinate pair.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::station::StationFactory::new(db)
        .coordinates(11.11, 22.22)
        .build()
        .await?;

    let repo = StationRepository::new(db);
    let result = repo
        .create(StationParams {
            name: "Elsewhere".to_string(),
            latitude: 11.11,
            longitude: 22.22,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that sharing only one coordinate is allowed.
///
/// Expected: Ok for a station on the same latitude but a different longitude
#[tokio::test]
async fn allows_shared_latitude() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::station::StationFactory::new(db)
        .coordinates(11.11, 22.22)
        .build()
        .await?;

    let repo = StationRepository::new(db);
    let result = repo
        .create(StationParams {
            name: "Neighbour".to_string(),
            latitude: 11.11,
            longitude: 22.23,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
