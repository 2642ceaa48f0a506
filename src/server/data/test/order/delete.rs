use super::*;

/// Tests deleting an order.
///
/// Expected: Ok(true) and the order's tickets removed with it
#[tokio::test]
async fn deletes_order_with_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, journey) = factory::helpers::create_journey_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    let ticket = factory::ticket::create_ticket(db, order.id, journey.id, 1, 1).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.delete(order.id).await?);
    assert!(!repo.delete(order.id).await?);
    assert!(entity::prelude::Ticket::find_by_id(ticket.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
