use super::*;

/// Tests that updating a journey replaces its crew.
///
/// Expected: only the newly listed crew member remains assigned
#[tokio::test]
async fn replaces_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (route, train, _) = factory::helpers::create_journey_with_dependencies(db).await?;
    let first = factory::crew::create_crew(db).await?;
    let second = factory::crew::create_crew(db).await?;
    let journey = factory::journey::JourneyFactory::new(db, route.id, train.id)
        .crew(vec![first.id])
        .build()
        .await?;

    let repo = JourneyRepository::new(db);
    let updated = repo
        .update(
            journey.id,
            JourneyParams {
                route_id: route.id,
                train_id: train.id,
                crew_ids: vec![second.id],
                departure_time: journey.departure_time,
                arrival_time: journey.arrival_time + Duration::hours(1),
            },
        )
        .await?;

    let crew_ids: Vec<i32> = updated.crew.iter().map(|c| c.id).collect();
    assert_eq!(crew_ids, vec![second.id]);
    assert_eq!(updated.arrival_time, journey.arrival_time + Duration::hours(1));

    Ok(())
}
