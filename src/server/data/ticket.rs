//! Ticket data repository for database operations.
//!
//! Besides plain CRUD this repository provides the per-journey aggregates used at read
//! time: the number of issued tickets and the list of taken seat slots. The
//! `(journey_id, cargo, seat)` unique index is what admits or rejects a booking.

use sea_orm::{
    sea_query::{Expr, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::collections::HashMap;

use crate::server::{
    model::ticket::{Ticket, TicketParams, TicketSort},
    query::{ordering::SortKey, pagination::PageRequest},
};

pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a ticket into an order.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The created ticket
    /// - `Err(DbErr)` - Database error, including a unique violation when the seat slot is
    ///   already taken
    pub async fn create(&self, order_id: i32, params: TicketParams) -> Result<Ticket, DbErr> {
        let entity = entity::ticket::ActiveModel {
            cargo: ActiveValue::Set(params.cargo),
            seat: ActiveValue::Set(params.seat),
            journey_id: ActiveValue::Set(params.journey_id),
            order_id: ActiveValue::Set(order_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ticket::from_entity(entity))
    }

    /// Finds a ticket, optionally restricted to orders of one user.
    ///
    /// # Arguments
    /// - `id` - Ticket id
    /// - `owner` - When set, tickets belonging to other users are treated as missing
    pub async fn find_by_id(&self, id: i32, owner: Option<i32>) -> Result<Option<Ticket>, DbErr> {
        let entity = entity::prelude::Ticket::find_by_id(id)
            .filter(owned_by(owner))
            .one(self.db)
            .await?;

        Ok(entity.map(Ticket::from_entity))
    }

    /// Gets one page of tickets, optionally restricted to orders of one user.
    pub async fn get_paginated(
        &self,
        owner: Option<i32>,
        ordering: &[SortKey<TicketSort>],
        page: PageRequest,
    ) -> Result<(Vec<Ticket>, u64), DbErr> {
        let mut query = entity::prelude::Ticket::find().filter(owned_by(owner));
        for key in ordering {
            let order = key.direction.into_order();
            query = match key.field {
                TicketSort::Id => query.order_by(entity::ticket::Column::Id, order),
                TicketSort::Journey => query.order_by(entity::ticket::Column::JourneyId, order),
                TicketSort::Cargo => query.order_by(entity::ticket::Column::Cargo, order),
                TicketSort::Seat => query.order_by(entity::ticket::Column::Seat, order),
                TicketSort::SeatSlot => query
                    .order_by(entity::ticket::Column::JourneyId, order.clone())
                    .order_by(entity::ticket::Column::Cargo, order.clone())
                    .order_by(entity::ticket::Column::Seat, order),
            };
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let tickets = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect();

        Ok((tickets, total))
    }

    /// Tickets of the given orders, ordered by journey, cargo and seat.
    pub async fn find_by_orders(&self, order_ids: Vec<i32>) -> Result<Vec<Ticket>, DbErr> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let tickets = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::ticket::Column::JourneyId)
            .order_by_asc(entity::ticket::Column::Cargo)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await?;

        Ok(tickets.into_iter().map(Ticket::from_entity).collect())
    }

    /// Number of tickets issued per journey. Journeys without tickets are absent.
    pub async fn count_by_journeys(&self, journey_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if journey_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::JourneyId)
            .column_as(sea_orm::ExprTrait::count(Expr::col(entity::ticket::Column::Id)), "issued")
            .filter(entity::ticket::Column::JourneyId.is_in(journey_ids))
            .group_by(entity::ticket::Column::JourneyId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(journey_id, issued)| (journey_id, issued.max(0) as u64))
            .collect())
    }

    /// Taken `(cargo, seat)` slots per journey, ordered by cargo then seat.
    pub async fn taken_places(
        &self,
        journey_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<(i32, i32)>>, DbErr> {
        if journey_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let slots: Vec<(i32, i32, i32)> = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::JourneyId)
            .column(entity::ticket::Column::Cargo)
            .column(entity::ticket::Column::Seat)
            .filter(entity::ticket::Column::JourneyId.is_in(journey_ids))
            .order_by_asc(entity::ticket::Column::Cargo)
            .order_by_asc(entity::ticket::Column::Seat)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut taken: HashMap<i32, Vec<(i32, i32)>> = HashMap::new();
        for (journey_id, cargo, seat) in slots {
            taken.entry(journey_id).or_default().push((cargo, seat));
        }

        Ok(taken)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Restricts tickets to orders placed by `owner`; no restriction when `None`.
fn owned_by(owner: Option<i32>) -> Condition {
    match owner {
        Some(user_id) => {
            Condition::all().add(entity::ticket::Column::OrderId.in_subquery(orders_of(user_id)))
        }
        None => Condition::all(),
    }
}

fn orders_of(user_id: i32) -> SelectStatement {
    entity::prelude::Order::find()
        .select_only()
        .column(entity::order::Column::Id)
        .filter(entity::order::Column::UserId.eq(user_id))
        .into_query()
}
