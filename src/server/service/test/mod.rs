use crate::server::{
    error::{validation::ValidationError, AppError},
    model::{
        journey::{JourneyParams, JourneySort, UpdateJourneyParams},
        order::{CreateOrderParams, OrderSort},
        route::{RouteParams, RouteSort, UpdateRouteParams},
        station::{StationParams, UpdateStationParams},
        ticket::{TicketParams, TicketSort},
        train::TrainParams,
        user::Credentials,
    },
    query::{filter::RouteFilter, ordering::resolve, pagination::PageRequest, QueryMap},
    service::{
        journey::JourneyService, order::OrderService, route::RouteService,
        station::StationService, ticket::TicketService, train::TrainService, user::UserService,
    },
    util::media::MediaStore,
};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};


/// Journey on a train with two cargos of two seats each, as used by the booking tests.
async fn small_journey(db: &DatabaseConnection) -> Result<i32, AppError> {
    let (_, _, route) = factory::helpers::create_route_with_stations(db).await?;
    let train_type = factory::create_train_type(db).await?;
    let train = factory::train::TrainFactory::new(db, train_type.id)
        .cargo_num(2)
        .places_in_cargo(2)
        .build()
        .await?;
    let journey = factory::create_journey(db, route.id, train.id).await?;

    Ok(journey.id)
}

fn seat(journey_id: i32, cargo: i32, seat: i32) -> TicketParams {
    TicketParams {
        cargo,
        seat,
        journey_id,
    }
}

fn is_validation(err: &AppError, expected: &ValidationError) -> bool {
    matches!(err, AppError::ValidationErr(actual) if actual == expected)
}
