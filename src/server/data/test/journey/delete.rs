use super::*;

/// Tests deleting a journey.
///
/// Verifies that its tickets and crew assignments are removed by the cascading foreign
/// keys while the crew member itself is kept.
///
/// Expected: Ok(true), no tickets or assignments left
#[tokio::test]
async fn deletes_journey_with_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, _) = factory::helpers::create_journey_with_dependencies(db).await?;
    let crew = factory::crew::create_crew(db).await?;
    let journey = factory::journey::JourneyFactory::new(db, route.id, train.id)
        .crew(vec![crew.id])
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    let ticket = factory::ticket::create_ticket(db, order.id, journey.id, 1, 1).await?;

    let repo = JourneyRepository::new(db);
    assert!(repo.delete(journey.id).await?);

    assert!(entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::JourneyCrew::find().all(db).await?.is_empty());
    assert!(entity::prelude::Crew::find_by_id(crew.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
