use super::*;

/// Tests grouped ticket counts.
///
/// Expected: one entry per journey with tickets, journeys without tickets absent
#[tokio::test]
async fn counts_tickets_per_journey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, busy) = factory::helpers::create_journey_with_dependencies(db).await?;
    let quiet = factory::journey::create_journey(db, route.id, train.id).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    for seat in 1..=4 {
        factory::ticket::create_ticket(db, order.id, busy.id, 1, seat).await?;
    }

    let repo = TicketRepository::new(db);
    let counts = repo.count_by_journeys(vec![busy.id, quiet.id]).await?;

    assert_eq!(counts.get(&busy.id), Some(&4));
    assert_eq!(counts.get(&quiet.id), None);
    assert!(repo.count_by_journeys(Vec::new()).await?.is_empty());

    Ok(())
}
