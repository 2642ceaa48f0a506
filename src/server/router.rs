//! HTTP route table and OpenAPI document.
//!
//! Handlers are registered through `utoipa_axum::routes!`, which groups handlers sharing a
//! path and collects their `utoipa::path` annotations into the generated document. The
//! document is served by Swagger UI at `/swagger-ui`.

use std::path::Path;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{crew, journey, order, route, station, ticket, train, train_type, user},
    state::AppState,
    util::media::MEDIA_URL,
};

/// Largest accepted request body; bounds image uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Train Station API", description = "Booking backend for stations, routes, journeys and orders"),
    tags(
        (name = "station", description = "Railway stations"),
        (name = "train-type", description = "Train categories"),
        (name = "train", description = "Rolling stock and seat layout"),
        (name = "crew", description = "Crew members"),
        (name = "route", description = "Connections between two stations"),
        (name = "journey", description = "Scheduled runs of a train on a route"),
        (name = "order", description = "Ticket purchases"),
        (name = "ticket", description = "Booked seats"),
        (name = "user", description = "Accounts and sessions")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `media_root` - Directory holding uploaded images, served read-only under `/media`
pub fn router(media_root: &Path) -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(station::list_stations, station::create_station))
        .routes(routes!(
            station::get_station,
            station::replace_station,
            station::update_station,
            station::delete_station
        ))
        .routes(routes!(
            train_type::list_train_types,
            train_type::create_train_type
        ))
        .routes(routes!(
            train_type::get_train_type,
            train_type::replace_train_type,
            train_type::update_train_type,
            train_type::delete_train_type
        ))
        .routes(routes!(train::list_trains, train::create_train))
        .routes(routes!(
            train::get_train,
            train::replace_train,
            train::update_train,
            train::delete_train
        ))
        .routes(routes!(train::upload_train_image))
        .routes(routes!(crew::list_crew, crew::create_crew))
        .routes(routes!(
            crew::get_crew,
            crew::replace_crew,
            crew::update_crew,
            crew::delete_crew
        ))
        .routes(routes!(crew::upload_crew_image))
        .routes(routes!(route::list_routes, route::create_route))
        .routes(routes!(
            route::get_route,
            route::replace_route,
            route::update_route,
            route::delete_route
        ))
        .routes(routes!(journey::list_journeys, journey::create_journey))
        .routes(routes!(
            journey::get_journey,
            journey::replace_journey,
            journey::update_journey,
            journey::delete_journey
        ))
        .routes(routes!(order::list_orders, order::create_order))
        .routes(routes!(order::get_order, order::delete_order))
        .routes(routes!(ticket::list_tickets))
        .routes(routes!(ticket::get_ticket, ticket::delete_ticket))
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .routes(routes!(user::logout))
        .routes(routes!(user::get_current_user))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .nest_service(MEDIA_URL, ServeDir::new(media_root))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
