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
        station::{CreateStationDto, StationDto, UpdateStationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::station::{Station, StationParams, StationSort, UpdateStationParams},
        query::{ordering, pagination::PageRequest, QueryMap},
        service::station::StationService,
        state::AppState,
    },
};

/// Tag for grouping station endpoints in OpenAPI documentation
pub static STATION_TAG: &str = "station";

/// List stations.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - One page of stations, ordered by name unless `ordering` says otherwise
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `page` is past the last page
#[utoipa::path(
    get,
    path = "/api/station",
    tag = STATION_TAG,
    params(
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: name"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of stations", body = PaginatedDto<StationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_stations(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ordering = ordering::resolve::<StationSort>(query.get("ordering").map(String::as_str));
    let page = StationService::new(&state.db)
        .get_paginated(&ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, Station::into_dto))))
}

/// Create a station.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new station
/// - `400 Bad Request` - Blank name
/// - `409 Conflict` - Another station has the same coordinates
#[utoipa::path(
    post,
    path = "/api/station",
    tag = STATION_TAG,
    request_body = CreateStationDto,
    responses(
        (status = 201, description = "Station created", body = StationDto),
        (status = 400, description = "Invalid station data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 409, description = "Coordinates already in use", body = ErrorDto)
    ),
)]
pub async fn create_station(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station = StationService::new(&state.db)
        .create(StationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(station.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/station/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station", body = StationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto)
    ),
)]
pub async fn get_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let station = StationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// Replace every field of a station.
#[utoipa::path(
    put,
    path = "/api/station/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    request_body = CreateStationDto,
    responses(
        (status = 200, description = "Station updated", body = StationDto),
        (status = 400, description = "Invalid station data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Coordinates already in use", body = ErrorDto)
    ),
)]
pub async fn replace_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station = StationService::new(&state.db)
        .update(id, UpdateStationParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// Update some fields of a station; omitted fields keep their values.
#[utoipa::path(
    patch,
    path = "/api/station/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    request_body = UpdateStationDto,
    responses(
        (status = 200, description = "Station updated", body = StationDto),
        (status = 400, description = "Invalid station data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 409, description = "Coordinates already in use", body = ErrorDto)
    ),
)]
pub async fn update_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let station = StationService::new(&state.db)
        .update(id, UpdateStationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(station.into_dto())))
}

/// Delete a station together with its routes and their journeys.
#[utoipa::path(
    delete,
    path = "/api/station/{id}",
    tag = STATION_TAG,
    params(("id" = i32, Path, description = "Station id")),
    responses(
        (status = 204, description = "Station deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Station not found", body = ErrorDto)
    ),
)]
pub async fn delete_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
