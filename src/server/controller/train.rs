use axum::{
    extract::{Multipart, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        image::ImageUploadDto,
        train::{CreateTrainDto, TrainDetailDto, TrainDto, UpdateTrainDto},
    },
    server::{
        controller::upload::read_image,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::train::{Train, TrainParams, TrainSort, UpdateTrainParams},
        query::{filter::TrainFilter, ordering, pagination::PageRequest, QueryMap},
        service::train::TrainService,
        state::AppState,
    },
};

/// Tag for grouping train endpoints in OpenAPI documentation
pub static TRAIN_TAG: &str = "train";

/// List trains.
///
/// Supports filtering by train type ids (`train_type=1,3`) and by a fragment of the
/// train name (`train_name=inter`). A malformed `train_type` list is ignored.
///
/// # Returns
/// - `200 OK` - One page of trains with their type names and capacity
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `page` is past the last page
#[utoipa::path(
    get,
    path = "/api/train",
    tag = TRAIN_TAG,
    params(
        ("train_type" = Option<String>, Query, description = "Comma separated train type ids"),
        ("train_name" = Option<String>, Query, description = "Case-insensitive name fragment"),
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: name, cargo_num, places_in_cargo, train_type"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of trains", body = PaginatedDto<TrainDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_trains(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = TrainFilter::resolve(&query);
    let ordering = ordering::resolve::<TrainSort>(query.get("ordering").map(String::as_str));
    let page = TrainService::new(&state.db)
        .get_paginated(&filter, &ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, Train::into_dto))))
}

/// Create a train.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new train with its type
/// - `400 Bad Request` - Blank name, non-positive layout or unknown train type
/// - `409 Conflict` - Name already in use
#[utoipa::path(
    post,
    path = "/api/train",
    tag = TRAIN_TAG,
    request_body = CreateTrainDto,
    responses(
        (status = 201, description = "Train created", body = TrainDetailDto),
        (status = 400, description = "Invalid train data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn create_train(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTrainDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train = TrainService::new(&state.db)
        .create(TrainParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(train.into_detail_dto())))
}

#[utoipa::path(
    get,
    path = "/api/train/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train id")),
    responses(
        (status = 200, description = "Train with its type", body = TrainDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto)
    ),
)]
pub async fn get_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let train = TrainService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train.into_detail_dto())))
}

#[utoipa::path(
    put,
    path = "/api/train/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train id")),
    request_body = CreateTrainDto,
    responses(
        (status = 200, description = "Train updated", body = TrainDetailDto),
        (status = 400, description = "Invalid train data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn replace_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTrainDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train = TrainService::new(&state.db)
        .update(id, UpdateTrainParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(train.into_detail_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/train/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train id")),
    request_body = UpdateTrainDto,
    responses(
        (status = 200, description = "Train updated", body = TrainDetailDto),
        (status = 400, description = "Invalid train data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn update_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train = TrainService::new(&state.db)
        .update(id, UpdateTrainParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(train.into_detail_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/train/{id}",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train id")),
    responses(
        (status = 204, description = "Train deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto)
    ),
)]
pub async fn delete_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TrainService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a photo of the train.
///
/// Expects a multipart body with the file in the `image` field. JPEG, PNG, GIF and WebP
/// are accepted; a previous image is replaced.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The train with its new image URL
/// - `400 Bad Request` - Missing or unsupported image
/// - `404 Not Found` - Train not found
#[utoipa::path(
    post,
    path = "/api/train/{id}/upload-image",
    tag = TRAIN_TAG,
    params(("id" = i32, Path, description = "Train id")),
    request_body(content = ImageUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = TrainDetailDto),
        (status = 400, description = "Missing or invalid image", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Train not found", body = ErrorDto)
    ),
)]
pub async fn upload_train_image(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bytes = read_image(multipart).await?;
    let train = TrainService::new(&state.db)
        .upload_image(&state.media, id, &bytes)
        .await?;

    Ok((StatusCode::OK, Json(train.into_detail_dto())))
}
