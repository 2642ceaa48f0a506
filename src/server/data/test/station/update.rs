use super::*;

/// Tests overwriting a station.
///
/// Expected: Ok with every field replaced and the id unchanged
#[tokio::test]
async fn overwrites_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = factory::station::create_station(db).await?;

    let repo = StationRepository::new(db);
    let updated = repo
        .update(
            station.id,
            StationParams {
                name: "Kharkiv".to_string(),
                latitude: 49.99,
                longitude: 36.23,
            },
        )
        .await?;

    assert_eq!(updated.id, station.id);
    assert_eq!(updated.name, "Kharkiv");
    assert_eq!(repo.find_by_id(station.id).await?, Some(updated));

    Ok(())
}
