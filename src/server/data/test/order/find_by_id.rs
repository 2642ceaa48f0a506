use super::*;

/// Tests that an owner-scoped lookup hides other users' orders.
///
/// Expected: found for the owner, missing for another user
#[tokio::test]
async fn scopes_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;

    let repo = OrderRepository::new(db);

    assert_eq!(
        repo.find_by_id(order.id, Some(owner.id)).await?.map(|o| o.id),
        Some(order.id)
    );
    assert!(repo.find_by_id(order.id, Some(stranger.id)).await?.is_none());
    assert!(repo.find_by_id(order.id, None).await?.is_some());

    Ok(())
}
