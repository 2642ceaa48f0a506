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
        order::{CreateOrderDto, OrderDetailDto, OrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            journey::Journey,
            order::{BookedOrder, CreateOrderParams, OrderSort},
        },
        query::{filter::OrderFilter, ordering, pagination::PageRequest, QueryMap},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List orders.
///
/// Staff see every order; other users only see their own.
///
/// # Returns
/// - `200 OK` - One page of orders with their tickets, newest first by default
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `page` is past the last page
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("created_at" = Option<String>, Query, description = "Creation date, YYYY-MM-DD"),
        ("ordering" = Option<String>, Query, description = "Sort key: created_at or -created_at"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 4, max: 10)")
    ),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedDto<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<QueryMap>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = OrderFilter::resolve(&query, state.utc_offset);
    let ordering = ordering::resolve::<OrderSort>(query.get("ordering").map(String::as_str));
    let page = OrderService::new(&state.db)
        .get_paginated(
            user.owner_scope(),
            &filter,
            &ordering,
            PageRequest::resolve(&query),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(page.into_dto(&uri, BookedOrder::<Journey>::into_dto)),
    ))
}

/// Place an order for the logged-in user.
///
/// All tickets are booked or none are: a single taken or out-of-range seat rejects the
/// whole order.
///
/// # Returns
/// - `201 Created` - The order with its tickets
/// - `400 Bad Request` - No tickets, unknown journey or seat outside the train's layout
/// - `401 Unauthorized` - User not authenticated
/// - `409 Conflict` - A requested seat is already taken
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "Seat already taken", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .create(CreateOrderParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with full journey details", body = OrderDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get(id, user.owner_scope())
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel an order, releasing every seat it holds.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
