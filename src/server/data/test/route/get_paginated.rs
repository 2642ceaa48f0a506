use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let kyiv = factory::station::create_station_named(db, "Kyiv").await?;
    let lviv = factory::station::create_station_named(db, "Lviv").await?;
    let odesa = factory::station::create_station_named(db, "Odesa").await?;

    factory::route::RouteFactory::new(db, kyiv.id, lviv.id)
        .distance(540)
        .build()
        .await?;
    factory::route::RouteFactory::new(db, lviv.id, odesa.id)
        .distance(790)
        .build()
        .await?;
    factory::route::RouteFactory::new(db, odesa.id, kyiv.id)
        .distance(475)
        .build()
        .await?;

    Ok(())
}

fn distances(routes: &[crate::server::model::route::Route]) -> Vec<i32> {
    routes.iter().map(|r| r.distance).collect()
}

/// Tests ordering routes by descending distance.
///
/// Expected: 790, 540, 475
#[tokio::test]
async fn orders_by_distance_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = RouteRepository::new(db);
    let (routes, total) = repo
        .get_paginated(
            &RouteFilter::default(),
            &resolve::<RouteSort>(Some("-distance")),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(distances(&routes), vec![790, 540, 475]);

    Ok(())
}

/// Tests that an unknown ordering token falls back to the default order.
///
/// Expected: newest route first, same as with no ordering at all
#[tokio::test]
async fn unknown_ordering_falls_back_to_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = RouteRepository::new(db);
    let (bogus, _) = repo
        .get_paginated(
            &RouteFilter::default(),
            &resolve::<RouteSort>(Some("bogus_field")),
            PageRequest::default(),
        )
        .await?;
    let (default, _) = repo
        .get_paginated(
            &RouteFilter::default(),
            &resolve::<RouteSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(distances(&bogus), vec![475, 790, 540]);
    assert_eq!(bogus, default);

    Ok(())
}

/// Tests ordering by source and destination station names.
///
/// Expected: source names ascending, then destination names descending
#[tokio::test]
async fn orders_by_station_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = RouteRepository::new(db);
    let (by_source, _) = repo
        .get_paginated(
            &RouteFilter::default(),
            &resolve::<RouteSort>(Some("source")),
            PageRequest::default(),
        )
        .await?;
    let (by_destination, _) = repo
        .get_paginated(
            &RouteFilter::default(),
            &resolve::<RouteSort>(Some("-destination")),
            PageRequest::default(),
        )
        .await?;

    let sources: Vec<&str> = by_source.iter().map(|r| r.source.name.as_str()).collect();
    let destinations: Vec<&str> = by_destination
        .iter()
        .map(|r| r.destination.name.as_str())
        .collect();
    assert_eq!(sources, vec!["Kyiv", "Lviv", "Odesa"]);
    assert_eq!(destinations, vec!["Odesa", "Lviv", "Kyiv"]);

    Ok(())
}

/// Tests filtering routes by station name fragments.
///
/// Verifies that the match is a case-insensitive substring match and that source and
/// destination filters combine with AND.
///
/// Expected: only routes whose stations match both fragments
#[tokio::test]
async fn filters_by_station_name_fragments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = RouteRepository::new(db);
    let (from_kyiv, total) = repo
        .get_paginated(
            &RouteFilter {
                source: Some("ky".to_string()),
                destination: None,
            },
            &resolve::<RouteSort>(None),
            PageRequest::default(),
        )
        .await?;
    let (lviv_odesa, both_total) = repo
        .get_paginated(
            &RouteFilter {
                source: Some("iv".to_string()),
                destination: Some("odesa".to_string()),
            },
            &resolve::<RouteSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(from_kyiv[0].label(), "Kyiv -> Lviv");
    assert_eq!(both_total, 1);
    assert_eq!(lviv_odesa[0].label(), "Lviv -> Odesa");

    Ok(())
}

/// Tests that LIKE wildcards in a fragment are matched literally.
///
/// Expected: no routes for a fragment consisting of `%`
#[tokio::test]
async fn escapes_like_wildcards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = RouteRepository::new(db);
    let (routes, total) = repo
        .get_paginated(
            &RouteFilter {
                source: Some("%".to_string()),
                destination: None,
            },
            &resolve::<RouteSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 0);
    assert!(routes.is_empty());

    Ok(())
}

/// Tests name filters on Cyrillic station names.
///
/// SQLite's `LIKE` folds ASCII case only, so the match must go through the lowercased
/// `name_search` column.
///
/// Expected: exact-case and differently-cased fragments both find the route
#[tokio::test]
async fn filters_by_cyrillic_station_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let kyiv = factory::station::create_station_named(db, "Київ").await?;
    let lviv = factory::station::create_station_named(db, "Львів").await?;
    factory::route::create_route(db, kyiv.id, lviv.id).await?;

    let repo = RouteRepository::new(db);
    for (source, destination) in [("Київ", "Львів"), ("київ", "ЛЬВ")] {
        let query: QueryMap = [
            ("source".to_string(), source.to_string()),
            ("destination".to_string(), destination.to_string()),
        ]
        .into_iter()
        .collect();

        let (routes, total) = repo
            .get_paginated(
                &RouteFilter::resolve(&query),
                &resolve::<RouteSort>(None),
                PageRequest::default(),
            )
            .await?;

        assert_eq!(total, 1, "source={source} destination={destination}");
        assert_eq!(routes[0].source.name, "Київ");
    }

    Ok(())
}
