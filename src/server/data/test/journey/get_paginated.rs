use super::*;

/// Tests filtering journeys by departure date.
///
/// Expected: only the journey departing on 2024-10-10 (UTC)
#[tokio::test]
async fn filters_by_departure_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, _) = factory::helpers::create_journey_with_dependencies(db).await?;
    let wanted = factory::journey::JourneyFactory::new(db, route.id, train.id)
        .schedule(at(2024, 10, 10, 23), at(2024, 10, 11, 5))
        .build()
        .await?;
    factory::journey::JourneyFactory::new(db, route.id, train.id)
        .schedule(at(2024, 10, 11, 0), at(2024, 10, 11, 6))
        .build()
        .await?;

    let query = QueryMap::from([("departure_time".to_string(), "2024-10-10".to_string())]);

    let repo = JourneyRepository::new(db);
    let (journeys, total) = repo
        .get_paginated(
            &JourneyFilter::resolve(&query, Utc.fix()),
            &resolve::<JourneySort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(journeys[0].id, wanted.id);

    Ok(())
}

/// Tests that the calendar date is taken in the configured offset.
///
/// Verifies that with a +03:00 offset a journey departing at 22:00 UTC on the 9th counts as
/// departing on the 10th.
///
/// Expected: the 22:00 UTC journey matches 2024-10-10, the 23:00 UTC one on the 10th does not
#[tokio::test]
async fn filters_by_local_calendar_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, _) = factory::helpers::create_journey_with_dependencies(db).await?;
    let early = factory::journey::JourneyFactory::new(db, route.id, train.id)
        .schedule(at(2024, 10, 9, 22), at(2024, 10, 10, 4))
        .build()
        .await?;
    factory::journey::JourneyFactory::new(db, route.id, train.id)
        .schedule(at(2024, 10, 10, 23), at(2024, 10, 11, 4))
        .build()
        .await?;

    let kyiv = FixedOffset::east_opt(3 * 3600).unwrap();
    let query = QueryMap::from([("departure_time".to_string(), "2024-10-10".to_string())]);

    let repo = JourneyRepository::new(db);
    let (journeys, total) = repo
        .get_paginated(
            &JourneyFilter::resolve(&query, kyiv),
            &resolve::<JourneySort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(journeys[0].id, early.id);

    Ok(())
}

/// Tests filtering journeys by the route's station names.
///
/// Expected: only journeys whose route starts at a station containing the fragment
#[tokio::test]
async fn filters_by_source_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kyiv = factory::station::create_station_named(db, "Kyiv").await?;
    let lviv = factory::station::create_station_named(db, "Lviv").await?;
    let to_lviv = factory::route::create_route(db, kyiv.id, lviv.id).await?;
    let to_kyiv = factory::route::create_route(db, lviv.id, kyiv.id).await?;
    let (_, train) = factory::helpers::create_train_with_type(db).await?;
    let wanted = factory::journey::create_journey(db, to_lviv.id, train.id).await?;
    factory::journey::create_journey(db, to_kyiv.id, train.id).await?;

    let query = QueryMap::from([("source".to_string(), "KYI".to_string())]);

    let repo = JourneyRepository::new(db);
    let (journeys, total) = repo
        .get_paginated(
            &JourneyFilter::resolve(&query, Utc.fix()),
            &resolve::<JourneySort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(journeys[0].id, wanted.id);
    assert_eq!(journeys[0].route.label(), "Kyiv -> Lviv");

    Ok(())
}

/// Tests ordering journeys by route (source station name) and by train name.
///
/// Expected: journeys sorted by the joined names
#[tokio::test]
async fn orders_by_route_and_train() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let odesa = factory::station::create_station_named(db, "Odesa").await?;
    let kyiv = factory::station::create_station_named(db, "Kyiv").await?;
    let from_odesa = factory::route::create_route(db, odesa.id, kyiv.id).await?;
    let from_kyiv = factory::route::create_route(db, kyiv.id, odesa.id).await?;
    let train_type = factory::train_type::create_train_type(db).await?;
    let zephyr = factory::train::TrainFactory::new(db, train_type.id)
        .name("Zephyr")
        .build()
        .await?;
    let arrow = factory::train::TrainFactory::new(db, train_type.id)
        .name("Arrow")
        .build()
        .await?;
    let first = factory::journey::create_journey(db, from_odesa.id, arrow.id).await?;
    let second = factory::journey::create_journey(db, from_kyiv.id, zephyr.id).await?;

    let repo = JourneyRepository::new(db);
    let (by_route, _) = repo
        .get_paginated(
            &JourneyFilter::default(),
            &resolve::<JourneySort>(Some("route")),
            PageRequest::default(),
        )
        .await?;
    let (by_train, _) = repo
        .get_paginated(
            &JourneyFilter::default(),
            &resolve::<JourneySort>(Some("-train")),
            PageRequest::default(),
        )
        .await?;

    let route_order: Vec<i32> = by_route.iter().map(|j| j.id).collect();
    let train_order: Vec<i32> = by_train.iter().map(|j| j.id).collect();
    assert_eq!(route_order, vec![second.id, first.id]);
    assert_eq!(train_order, vec![second.id, first.id]);

    Ok(())
}

/// Tests that every journey on a page carries its own ticket count.
///
/// Expected: availability computed per journey
#[tokio::test]
async fn enriches_page_with_ticket_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, busy) = factory::helpers::create_journey_with_dependencies(db).await?;
    let quiet = factory::journey::create_journey(db, route.id, train.id).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::ticket::create_ticket(db, order.id, busy.id, 1, 1).await?;
    factory::ticket::create_ticket(db, order.id, busy.id, 1, 2).await?;

    let repo = JourneyRepository::new(db);
    let (journeys, _) = repo
        .get_paginated(
            &JourneyFilter::default(),
            &resolve::<JourneySort>(None),
            PageRequest::default(),
        )
        .await?;

    let issued: Vec<(i32, u64)> = journeys.iter().map(|j| (j.id, j.tickets_issued)).collect();
    assert_eq!(issued, vec![(quiet.id, 0), (busy.id, 2)]);

    Ok(())
}
