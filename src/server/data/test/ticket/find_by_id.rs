use super::*;

/// Tests that an owner-scoped lookup hides other users' tickets.
///
/// Expected: found for the owner and without scope, missing for another user
#[tokio::test]
async fn scopes_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;
    let ticket = factory::ticket::create_ticket(db, order.id, journey.id, 1, 1).await?;

    let repo = TicketRepository::new(db);

    assert!(repo.find_by_id(ticket.id, Some(owner.id)).await?.is_some());
    assert!(repo.find_by_id(ticket.id, None).await?.is_some());
    assert!(repo.find_by_id(ticket.id, Some(stranger.id)).await?.is_none());

    Ok(())
}
