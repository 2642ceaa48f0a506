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
        ticket::{TicketDetailDto, TicketDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            journey::Journey,
            ticket::{BookedTicket, TicketSort},
        },
        query::{ordering, pagination::PageRequest, QueryMap},
        service::ticket::TicketService,
        state::AppState,
    },
};

pub static TICKET_TAG: &str = "ticket";

/// List tickets; non-staff users only see tickets from their own orders.
#[utoipa::path(
    get,
    path = "/api/ticket",
    tag = TICKET_TAG,
    params(
        ("ordering" = Option<String>, Query, description = "Comma separated sort keys: journey, cargo, seat"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of tickets", body = PaginatedDto<TicketDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ordering = ordering::resolve::<TicketSort>(query.get("ordering").map(String::as_str));
    let page = TicketService::new(&state.db)
        .get_paginated(user.owner_scope(), &ordering, PageRequest::resolve(&query))
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&uri, BookedTicket::<Journey>::into_dto)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/ticket/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket with full journey details", body = TicketDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ticket = TicketService::new(&state.db)
        .get(id, user.owner_scope())
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/ticket/{id}",
    tag = TICKET_TAG,
    params(("id" = i32, Path, description = "Ticket id")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TicketService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
