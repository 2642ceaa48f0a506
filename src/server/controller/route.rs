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
        route::{CreateRouteDto, RouteDetailDto, RouteDto, UpdateRouteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::route::{Route, RouteParams, RouteSort, UpdateRouteParams},
        query::{filter::RouteFilter, ordering, pagination::PageRequest, QueryMap},
        service::route::RouteService,
        state::AppState,
    },
};

/// Tag for grouping route endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "route";

/// List routes.
///
/// `source` and `destination` match a case-insensitive fragment of the respective
/// station's name. Ordering by `source` or `destination` sorts by station name.
///
/// # Returns
/// - `200 OK` - One page of routes with station names
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `page` is past the last page
#[utoipa::path(
    get,
    path = "/api/route",
    tag = ROUTE_TAG,
    params(
        ("source" = Option<String>, Query, description = "Source station name fragment"),
        ("destination" = Option<String>, Query, description = "Destination station name fragment"),
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: source, destination, distance"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of routes", body = PaginatedDto<RouteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_routes(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = RouteFilter::resolve(&query);
    let ordering = ordering::resolve::<RouteSort>(query.get("ordering").map(String::as_str));
    let page = RouteService::new(&state.db)
        .get_paginated(&filter, &ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, Route::into_dto))))
}

/// Create a route between two distinct stations.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new route with both stations
/// - `400 Bad Request` - Same source and destination, unknown station or non-positive distance
/// - `409 Conflict` - A route with the same endpoints exists
#[utoipa::path(
    post,
    path = "/api/route",
    tag = ROUTE_TAG,
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Route created", body = RouteDetailDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 409, description = "Route already exists", body = ErrorDto)
    ),
)]
pub async fn create_route(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let route = RouteService::new(&state.db)
        .create(RouteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(route.into_detail_dto())))
}

#[utoipa::path(
    get,
    path = "/api/route/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    responses(
        (status = 200, description = "Route with both stations", body = RouteDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let route = RouteService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(route.into_detail_dto())))
}

#[utoipa::path(
    put,
    path = "/api/route/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    request_body = CreateRouteDto,
    responses(
        (status = 200, description = "Route updated", body = RouteDetailDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 409, description = "Route already exists", body = ErrorDto)
    ),
)]
pub async fn replace_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let route = RouteService::new(&state.db)
        .update(id, UpdateRouteParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(route.into_detail_dto())))
}

/// Update some fields of a route. The merged route must still connect two distinct stations.
#[utoipa::path(
    patch,
    path = "/api/route/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    request_body = UpdateRouteDto,
    responses(
        (status = 200, description = "Route updated", body = RouteDetailDto),
        (status = 400, description = "Invalid route data", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 409, description = "Route already exists", body = ErrorDto)
    ),
)]
pub async fn update_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let route = RouteService::new(&state.db)
        .update(id, UpdateRouteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(route.into_detail_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/route/{id}",
    tag = ROUTE_TAG,
    params(("id" = i32, Path, description = "Route id")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn delete_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RouteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
