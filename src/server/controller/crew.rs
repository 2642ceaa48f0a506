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
        crew::{CreateCrewDto, CrewDto, UpdateCrewDto},
        image::ImageUploadDto,
    },
    server::{
        controller::upload::read_image,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::crew::{Crew, CrewParams, CrewSort, UpdateCrewParams},
        query::{ordering, pagination::PageRequest, QueryMap},
        service::crew::CrewService,
        state::AppState,
    },
};

pub static CREW_TAG: &str = "crew";

#[utoipa::path(
    get,
    path = "/api/crew",
    tag = CREW_TAG,
    params(
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: first_name, last_name"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of crew members", body = PaginatedDto<CrewDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_crew(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ordering = ordering::resolve::<CrewSort>(query.get("ordering").map(String::as_str));
    let page = CrewService::new(&state.db)
        .get_paginated(&ordering, PageRequest::resolve(&query))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&uri, Crew::into_dto))))
}

#[utoipa::path(
    post,
    path = "/api/crew",
    tag = CREW_TAG,
    request_body = CreateCrewDto,
    responses(
        (status = 201, description = "Crew member created", body = CrewDto),
        (status = 400, description = "Invalid crew data", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto)
    ),
)]
pub async fn create_crew(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let crew = CrewService::new(&state.db)
        .create(CrewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(crew.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    responses(
        (status = 200, description = "Crew member", body = CrewDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn get_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let crew = CrewService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(crew.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    request_body = CreateCrewDto,
    responses(
        (status = 200, description = "Crew member updated", body = CrewDto),
        (status = 400, description = "Invalid crew data", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn replace_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let crew = CrewService::new(&state.db)
        .update(id, UpdateCrewParams::replace(payload))
        .await?;

    Ok((StatusCode::OK, Json(crew.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    request_body = UpdateCrewDto,
    responses(
        (status = 200, description = "Crew member updated", body = CrewDto),
        (status = 400, description = "Invalid crew data", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn update_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCrewDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let crew = CrewService::new(&state.db)
        .update(id, UpdateCrewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(crew.into_dto())))
}

/// Delete a crew member; they are removed from every journey they were assigned to.
#[utoipa::path(
    delete,
    path = "/api/crew/{id}",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    responses(
        (status = 204, description = "Crew member deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn delete_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CrewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a photo of the crew member from the multipart `image` field.
#[utoipa::path(
    post,
    path = "/api/crew/{id}/upload-image",
    tag = CREW_TAG,
    params(("id" = i32, Path, description = "Crew member id")),
    request_body(content = ImageUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = CrewDto),
        (status = 400, description = "Missing or invalid image", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto)
    ),
)]
pub async fn upload_crew_image(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bytes = read_image(multipart).await?;
    let crew = CrewService::new(&state.db)
        .upload_image(&state.media, id, &bytes)
        .await?;

    Ok((StatusCode::OK, Json(crew.into_dto())))
}
