use super::*;

/// Tests ordering crew by last name.
///
/// Expected: last names ascending
#[tokio::test]
async fn orders_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Crew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::crew::create_crew_named(db, "Taras", "Melnyk").await?;
    factory::crew::create_crew_named(db, "Iryna", "Bondar").await?;
    factory::crew::create_crew_named(db, "Petro", "Kovalenko").await?;

    let repo = CrewRepository::new(db);
    let (crew, total) = repo
        .get_paginated(&resolve::<CrewSort>(Some("last_name")), PageRequest::default())
        .await?;

    let last_names: Vec<&str> = crew.iter().map(|c| c.last_name.as_str()).collect();
    assert_eq!(total, 3);
    assert_eq!(last_names, vec!["Bondar", "Kovalenko", "Melnyk"]);

    Ok(())
}

/// Tests the default crew order.
///
/// Expected: newest crew member first
#[tokio::test]
async fn orders_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Crew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::crew::create_crew(db).await?;
    let second = factory::crew::create_crew(db).await?;

    let repo = CrewRepository::new(db);
    let (crew, _) = repo
        .get_paginated(&resolve::<CrewSort>(None), PageRequest::default())
        .await?;

    assert_eq!(crew[0].id, second.id);
    assert_eq!(crew[1].id, first.id);

    Ok(())
}
