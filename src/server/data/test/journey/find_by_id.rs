use super::*;

/// Tests that issued tickets reduce availability.
///
/// Expected: tickets_available equals capacity minus issued tickets
#[tokio::test]
async fn counts_issued_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, train, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 1, 1).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 1, 2).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 2, 1).await?;

    let repo = JourneyRepository::new(db);
    let found = repo.find_by_id(journey.id).await?.unwrap();

    let capacity = (train.cargo_num * train.places_in_cargo) as i64;
    assert_eq!(found.tickets_issued, 3);
    assert_eq!(found.tickets_available(), capacity - 3);

    Ok(())
}

/// Tests the journey detail with taken seat slots.
///
/// Expected: slots ordered by cargo then seat, independent of insertion order
#[tokio::test]
async fn lists_taken_places_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_journey_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 2, 1).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 1, 5).await?;
    factory::ticket::create_ticket(db, order.id, journey.id, 1, 2).await?;
    factory::ticket::create_ticket(db, order.id, other.id, 1, 1).await?;

    let repo = JourneyRepository::new(db);
    let detail = repo.find_detail_by_id(journey.id).await?.unwrap();

    assert_eq!(detail.taken_places, vec![(1, 2), (1, 5), (2, 1)]);
    assert_eq!(detail.journey.tickets_issued, 3);

    Ok(())
}

/// Tests looking up a journey that does not exist.
///
/// Expected: Ok(None) for both the summary and the detail lookup
#[tokio::test]
async fn returns_none_for_missing_journey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JourneyRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_detail_by_id(999).await?.is_none());

    Ok(())
}
