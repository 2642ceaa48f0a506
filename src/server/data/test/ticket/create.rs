use super::*;

/// Tests booking a seat slot.
///
/// Expected: Ok with the ticket attached to the order and journey
#[tokio::test]
async fn creates_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let repo = TicketRepository::new(db);
    let ticket = repo
        .create(
            order.id,
            TicketParams {
                cargo: 3,
                seat: 7,
                journey_id: journey.id,
            },
        )
        .await?;

    assert_eq!(ticket.order_id, order.id);
    assert_eq!(ticket.journey_id, journey.id);
    assert_eq!((ticket.cargo, ticket.seat), (3, 7));

    Ok(())
}

/// Tests that a seat slot can only be booked once per journey.
///
/// Verifies that the same (cargo, seat) is rejected on the same journey, even from another
/// order, but accepted on a different journey.
///
/// Expected: Err with a unique constraint violation for the same journey only
#[tokio::test]
async fn rejects_taken_seat_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let other_journey = factory::journey::create_journey(db, route.id, train.id).await?;
    let user = factory::user::create_user(db).await?;
    let first = factory::order::create_order(db, user.id).await?;
    let second = factory::order::create_order(db, user.id).await?;
    factory::ticket::create_ticket(db, first.id, journey.id, 1, 1).await?;

    let repo = TicketRepository::new(db);
    let taken = repo
        .create(
            second.id,
            TicketParams {
                cargo: 1,
                seat: 1,
                journey_id: journey.id,
            },
        )
        .await;
    let elsewhere = repo
        .create(
            second.id,
            TicketParams {
                cargo: 1,
                seat: 1,
                journey_id: other_journey.id,
            },
        )
        .await;

    assert!(matches!(
        taken.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert!(elsewhere.is_ok());

    Ok(())
}
