use super::*;

/// Tests storing and clearing a train image path.
///
/// Expected: image set without touching other fields, then cleared
#[tokio::test]
async fn sets_and_clears_image() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, train) = factory::helpers::create_train_with_type(db).await?;

    let repo = TrainRepository::new(db);
    let with_image = repo
        .set_image(train.id, Some("uploads/trains/x-abc.png".to_string()))
        .await?;
    assert_eq!(with_image.image.as_deref(), Some("uploads/trains/x-abc.png"));
    assert_eq!(with_image.name, train.name);
    assert_eq!(with_image.cargo_num, train.cargo_num);

    let cleared = repo.set_image(train.id, None).await?;
    assert!(cleared.image.is_none());

    Ok(())
}
