use super::*;

/// Tests filtering orders by creation date.
///
/// Verifies that only orders created on 2024-10-10 are returned, including one created in
/// the last second of the day, and that orders from neighbouring days are excluded.
///
/// Expected: the two orders from 2024-10-10, most recent first
#[tokio::test]
async fn filters_by_created_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let morning = factory::order::create_order_at(
        db,
        user.id,
        Utc.with_ymd_and_hms(2024, 10, 10, 9, 30, 0).unwrap(),
    )
    .await?;
    let late = factory::order::create_order_at(
        db,
        user.id,
        Utc.with_ymd_and_hms(2024, 10, 10, 23, 59, 59).unwrap(),
    )
    .await?;
    factory::order::create_order_at(db, user.id, Utc.with_ymd_and_hms(2024, 10, 9, 12, 0, 0).unwrap())
        .await?;
    factory::order::create_order_at(db, user.id, Utc.with_ymd_and_hms(2024, 10, 11, 0, 0, 0).unwrap())
        .await?;

    let query = QueryMap::from([("created_at".to_string(), "2024-10-10".to_string())]);

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated(
            None,
            &OrderFilter::resolve(&query, Utc.fix()),
            &resolve::<OrderSort>(None),
            PageRequest::default(),
        )
        .await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![late.id, morning.id]);

    Ok(())
}

/// Tests that a malformed date does not filter.
///
/// Expected: every order is returned
#[tokio::test]
async fn ignores_malformed_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::order::create_order(db, user.id).await?;
    factory::order::create_order(db, user.id).await?;

    let query = QueryMap::from([("created_at".to_string(), "10/10/2024".to_string())]);

    let repo = OrderRepository::new(db);
    let (_, total) = repo
        .get_paginated(
            None,
            &OrderFilter::resolve(&query, Utc.fix()),
            &resolve::<OrderSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests that orders are scoped to their owner and carry their tickets.
///
/// Expected: only the owner's order, with its tickets sorted by seat slot
#[tokio::test]
async fn scopes_to_owner_with_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;
    let other = factory::order::create_order(db, stranger.id).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 2, 2).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 1, 4).await?;
    factory::ticket::create_ticket(db, other.id, journey.id, 1, 1).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo
        .get_paginated(
            Some(owner.id),
            &OrderFilter::default(),
            &resolve::<OrderSort>(None),
            PageRequest::default(),
        )
        .await?;

    let seats: Vec<(i32, i32)> = orders[0].tickets.iter().map(|t| (t.cargo, t.seat)).collect();
    assert_eq!(total, 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(seats, vec![(1, 4), (2, 2)]);

    Ok(())
}
