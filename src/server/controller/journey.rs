use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        journey::{CreateJourneyDto, JourneyDetailDto, JourneyDto, UpdateJourneyDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::journey::{Journey, JourneyParams, JourneySort, UpdateJourneyParams},
        query::{filter::JourneyFilter, ordering, pagination::PageRequest, QueryMap},
        service::journey::JourneyService,
        state::AppState,
    },
};

/// Tag for grouping journey endpoints in OpenAPI documentation
pub static JOURNEY_TAG: &str = "journey";

/// List journeys.
///
/// `departure_time` and `arrival_time` take a calendar date (`YYYY-MM-DD`) and match the
/// whole day in the server's configured timezone. An unparseable date is ignored.
/// `source` and `destination` match a case-insensitive fragment of the route's station names.
///
/// # Returns
/// - `200 OK` - One page of journeys with route, train, crew and seats available
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `page` is past the last page
#[utoipa::path(
    get,
    path = "/api/journey",
    tag = JOURNEY_TAG,
    params(
        ("departure_time" = Option<String>, Query, description = "Departure date, YYYY-MM-DD"),
        ("arrival_time" = Option<String>, Query, description = "Arrival date, YYYY-MM-DD"),
        ("source" = Option<String>, Query, description = "Source station name fragment"),
        ("destination" = Option<String>, Query, description = "Destination station name fragment"),
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: route, train, departure_time, arrival_time"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of journeys", body = PaginatedDto<JourneyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_journeys(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = JourneyFilter::resolve(&query, state.utc_offset);
    let ordering = ordering::resolve::<JourneySort>(query.get("ordering").map(String::as_str));
    let page = JourneyService::new(&state.db)
        .get_paginated(&filter, &ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, Journey::into_dto))))
}

/// Schedule a journey.
///
/// Duplicate crew ids are collapsed.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The scheduled journey
/// - `400 Bad Request` - Departure not before arrival, or unknown route, train or crew member
#[utoipa::path(
    post,
    path = "/api/journey",
    tag = JOURNEY_TAG,
    request_body = CreateJourneyDto,
    responses(
        (status = 201, description = "Journey scheduled", body = JourneyDto),
        (status = 400, description = "Invalid journey data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto)
    ),
)]
pub async fn create_journey(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let journey = JourneyService::new(&state.db)
        .create(JourneyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(journey.into_dto())))
}

/// Get a journey together with the seats already taken on it.
#[utoipa::path(
    get,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey id")),
    responses(
        (status = 200, description = "Journey with taken places", body = JourneyDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto)
    ),
)]
pub async fn get_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let journey = JourneyService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(journey.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey id")),
    request_body = CreateJourneyDto,
    responses(
        (status = 200, description = "Journey updated", body = JourneyDto),
        (status = 400, description = "Invalid journey data", body = ErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto)
    ),
)]
pub async fn replace_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let journey = JourneyService::new(&state.db)
        .update(id, UpdateJourneyParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(journey.into_dto())))
}

/// Update some fields of a journey.
///
/// A `crew` list replaces the whole assignment; omitting it keeps the current crew.
#[utoipa::path(
    patch,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey id")),
    request_body = UpdateJourneyDto,
    responses(
        (status = 200, description = "Journey updated", body = JourneyDto),
        (status = 400, description = "Invalid journey data", body = ErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto)
    ),
)]
pub async fn update_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJourneyDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let journey = JourneyService::new(&state.db)
        .update(id, UpdateJourneyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(journey.into_dto())))
}

/// Delete a journey. Tickets booked on it are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/journey/{id}",
    tag = JOURNEY_TAG,
    params(("id" = i32, Path, description = "Journey id")),
    responses(
        (status = 204, description = "Journey deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Journey not found", body = ErrorDto)
    ),
)]
pub async fn delete_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    JourneyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
