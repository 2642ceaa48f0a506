use super::*;

/// Tests creating a crew member.
///
/// Expected: Ok with both names stored and the full name derived from them
#[tokio::test]
async fn creates_crew_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Crew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CrewRepository::new(db);
    let crew = repo
        .create(CrewParams {
            first_name: "Olena".to_string(),
            last_name: "Shevchenko".to_string(),
        })
        .await?;

    assert_eq!(crew.full_name(), "Olena Shevchenko");
    assert_eq!(repo.find_by_id(crew.id).await?, Some(crew));

    Ok(())
}
