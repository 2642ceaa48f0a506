use super::*;

/// Tests creating a journey with assigned crew.
///
/// Verifies that the journey is returned with route, train and crew attached and that a
/// fresh journey has its whole capacity available.
///
/// Expected: Ok with crew ordered by id and tickets_available equal to capacity
#[tokio::test]
async fn creates_journey_with_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, route) = factory::helpers::create_route_with_stations(db).await?;
    let (_, train) = factory::helpers::create_train_with_type(db).await?;
    let driver = factory::crew::create_crew_named(db, "Ivan", "Franko").await?;
    let conductor = factory::crew::create_crew_named(db, "Lesya", "Ukrainka").await?;

    let repo = JourneyRepository::new(db);
    let journey = repo
        .create(JourneyParams {
            route_id: route.id,
            train_id: train.id,
            crew_ids: vec![driver.id, conductor.id],
            departure_time: at(2024, 10, 10, 8),
            arrival_time: at(2024, 10, 10, 14),
        })
        .await?;

    let crew: Vec<String> = journey.crew.iter().map(|c| c.full_name()).collect();
    assert_eq!(journey.route.id, route.id);
    assert_eq!(journey.train.id, train.id);
    assert_eq!(crew, vec!["Ivan Franko", "Lesya Ukrainka"]);
    assert_eq!(journey.tickets_issued, 0);
    assert_eq!(journey.tickets_available(), journey.train.capacity());

    Ok(())
}
