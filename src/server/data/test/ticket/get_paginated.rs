use super::*;

/// Tests the default ticket order.
///
/// Expected: tickets sorted by journey, then cargo, then seat
#[tokio::test]
async fn orders_by_seat_slot_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, first) = factory::helpers::create_journey_with_dependencies(db).await?;
    let second = factory::journey::create_journey(db, route.id, train.id).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::ticket::create_ticket(db, order.id, second.id, 1, 1).await?;
    factory::ticket::create_ticket(db, order.id, first.id, 2, 1).await?;
    factory::ticket::create_ticket(db, order.id, first.id, 1, 3).await?;
    factory::ticket::create_ticket(db, order.id, first.id, 1, 2).await?;

    let repo = TicketRepository::new(db);
    let (tickets, total) = repo
        .get_paginated(
            None,
            &resolve::<TicketSort>(None),
            PageRequest {
                page: 1,
                per_page: 10,
            },
        )
        .await?;

    let slots: Vec<(i32, i32, i32)> = tickets
        .iter()
        .map(|t| (t.journey_id, t.cargo, t.seat))
        .collect();
    assert_eq!(total, 4);
    assert_eq!(
        slots,
        vec![
            (first.id, 1, 2),
            (first.id, 1, 3),
            (first.id, 2, 1),
            (second.id, 1, 1)
        ]
    );

    Ok(())
}

/// Tests that an owner-scoped page only counts the owner's tickets.
///
/// Expected: total and items restricted to the owner's orders
#[tokio::test]
async fn scopes_page_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let own_order = factory::order::create_order(db, owner.id).await?;
    let other_order = factory::order::create_order(db, stranger.id).await?;
    factory::ticket::create_ticket(db, own_order.id, journey.id, 1, 1).await?;
    factory::ticket::create_ticket(db, other_order.id, journey.id, 1, 2).await?;
    factory::ticket::create_ticket(db, other_order.id, journey.id, 1, 3).await?;

    let repo = TicketRepository::new(db);
    let (tickets, total) = repo
        .get_paginated(
            Some(owner.id),
            &resolve::<TicketSort>(Some("-seat")),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(tickets[0].order_id, own_order.id);

    Ok(())
}
