use super::*;

/// Tests creating a train.
///
/// Verifies that the created train is returned with its train type loaded.
///
/// Expected: Ok with the train type name attached and capacity of cargo_num × places
#[tokio::test]
async fn creates_train_with_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let train_type = factory::train_type::create_train_type_named(db, "Intercity").await?;

    let repo = TrainRepository::new(db);
    let train = repo
        .create(TrainParams {
            name: "Hyundai Rotem".to_string(),
            cargo_num: 9,
            places_in_cargo: 64,
            train_type_id: train_type.id,
        })
        .await?;

    assert_eq!(train.train_type.name, "Intercity");
    assert_eq!(train.capacity(), 576);
    assert!(train.image.is_none());

    Ok(())
}

/// Tests that train names are unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let train_type = factory::train_type::create_train_type(db).await?;
    factory::train::TrainFactory::new(db, train_type.id)
        .name("Skoda")
        .build()
        .await?;

    let repo = TrainRepository::new(db);
    let result = repo
        .create(TrainParams {
            name: "Skoda".to_string(),
            cargo_num: 1,
            places_in_cargo: 1,
            train_type_id: train_type.id,
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
