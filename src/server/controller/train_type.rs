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
        train_type::{CreateTrainTypeDto, TrainTypeDto, UpdateTrainTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::train_type::{TrainType, TrainTypeParams, TrainTypeSort, UpdateTrainTypeParams},
        query::{ordering, pagination::PageRequest, QueryMap},
        service::train_type::TrainTypeService,
        state::AppState,
    },
};

pub static TRAIN_TYPE_TAG: &str = "train-type";

#[utoipa::path(
    get,
    path = "/api/train-type",
    tag = TRAIN_TYPE_TAG,
    params(
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: name"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of train types", body = PaginatedDto<TrainTypeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_train_types(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ordering = ordering::resolve::<TrainTypeSort>(query.get("ordering").map(String::as_str));
    let page = TrainTypeService::new(&state.db)
        .get_paginated(&ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, TrainType::into_dto))))
}

#[utoipa::path(
    post,
    path = "/api/train-type",
    tag = TRAIN_TYPE_TAG,
    request_body = CreateTrainTypeDto,
    responses(
        (status = 201, description = "Train type created", body = TrainTypeDto),
        (status = 400, description = "Invalid train type data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn create_train_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTrainTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train_type = TrainTypeService::new(&state.db)
        .create(TrainTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(train_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/train-type/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type id")),
    responses(
        (status = 200, description = "Train type", body = TrainTypeDto),
        (status = 404, description = "Train type not found", body = ErrorDto)
    ),
)]
pub async fn get_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let train_type = TrainTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train_type.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/train-type/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type id")),
    request_body = CreateTrainTypeDto,
    responses(
        (status = 200, description = "Train type updated", body = TrainTypeDto),
        (status = 400, description = "Invalid train type data", body = ErrorDto),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn replace_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateTrainTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train_type = TrainTypeService::new(&state.db)
        .update(id, UpdateTrainTypeParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(train_type.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/train-type/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type id")),
    request_body = UpdateTrainTypeDto,
    responses(
        (status = 200, description = "Train type updated", body = TrainTypeDto),
        (status = 400, description = "Invalid train type data", body = ErrorDto),
        (status = 404, description = "Train type not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto)
    ),
)]
pub async fn update_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let train_type = TrainTypeService::new(&state.db)
        .update(id, UpdateTrainTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(train_type.into_dto())))
}

/// Delete a train type; trains of this type are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/train-type/{id}",
    tag = TRAIN_TYPE_TAG,
    params(("id" = i32, Path, description = "Train type id")),
    responses(
        (status = 204, description = "Train type deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Train type not found", body = ErrorDto)
    ),
)]
pub async fn delete_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TrainTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
