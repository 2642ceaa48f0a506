use super::*;
use crate::server::query::QueryMap;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(i32, i32), DbErr> {
    let express = factory::train_type::create_train_type_named(db, "Express").await?;
    let regional = factory::train_type::create_train_type_named(db, "Regional").await?;

    factory::train::TrainFactory::new(db, regional.id)
        .name("Dnipro Night")
        .build()
        .await?;
    factory::train::TrainFactory::new(db, express.id)
        .name("Carpathian Express")
        .build()
        .await?;
    factory::train::TrainFactory::new(db, regional.id)
        .name("Black Sea")
        .build()
        .await?;

    Ok((express.id, regional.id))
}

/// Tests filtering trains by a list of train type ids.
///
/// Expected: only trains of the listed types
#[tokio::test]
async fn filters_by_train_type_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, regional) = seed(db).await?;

    let query = QueryMap::from([("train_type".to_string(), format!("{},999", regional))]);

    let repo = TrainRepository::new(db);
    let (trains, total) = repo
        .get_paginated(
            &TrainFilter::resolve(&query),
            &resolve::<TrainSort>(Some("name")),
            PageRequest::default(),
        )
        .await?;

    let names: Vec<&str> = trains.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(total, 2);
    assert_eq!(names, vec!["Black Sea", "Dnipro Night"]);

    Ok(())
}

/// Tests that a malformed train type list does not filter.
///
/// Expected: every train is returned
#[tokio::test]
async fn ignores_malformed_train_type_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let query = QueryMap::from([("train_type".to_string(), "1,abc".to_string())]);

    let repo = TrainRepository::new(db);
    let (_, total) = repo
        .get_paginated(
            &TrainFilter::resolve(&query),
            &resolve::<TrainSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 3);

    Ok(())
}

/// Tests filtering trains by a name fragment.
///
/// Expected: case-insensitive substring match on the train name
#[tokio::test]
async fn filters_by_name_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let query = QueryMap::from([("train_name".to_string(), "NIGHT".to_string())]);

    let repo = TrainRepository::new(db);
    let (trains, total) = repo
        .get_paginated(
            &TrainFilter::resolve(&query),
            &resolve::<TrainSort>(None),
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(trains[0].name, "Dnipro Night");

    Ok(())
}

/// Tests ordering by train type name.
///
/// Expected: Regional trains before the Express train when sorted descending
#[tokio::test]
async fn orders_by_train_type_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = TrainRepository::new(db);
    let (trains, _) = repo
        .get_paginated(
            &TrainFilter::default(),
            &resolve::<TrainSort>(Some("-train_type,name")),
            PageRequest::default(),
        )
        .await?;

    let names: Vec<&str> = trains.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Black Sea", "Dnipro Night", "Carpathian Express"]);

    Ok(())
}
