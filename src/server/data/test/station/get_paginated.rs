use super::*;

/// Tests the default station order.
///
/// Expected: stations sorted by name ascending
#[tokio::test]
async fn orders_by_name_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Lviv", "Kyiv", "Odesa"] {
        factory::station::create_station_named(db, name).await?;
    }

    let repo = StationRepository::new(db);
    let (stations, total) = repo
        .get_paginated(&resolve::<StationSort>(None), PageRequest::default())
        .await?;

    let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(total, 3);
    assert_eq!(names, vec!["Kyiv", "Lviv", "Odesa"]);

    Ok(())
}

/// Tests descending name order and page slicing.
///
/// Expected: second page of size 2 holds only the last station in descending order
#[tokio::test]
async fn pages_descending_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Lviv", "Kyiv", "Odesa"] {
        factory::station::create_station_named(db, name).await?;
    }

    let repo = StationRepository::new(db);
    let (stations, total) = repo
        .get_paginated(
            &resolve::<StationSort>(Some("-name")),
            PageRequest {
                page: 2,
                per_page: 2,
            },
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Kyiv");

    Ok(())
}
