//! Order service: booking seats.
//!
//! Placing an order is one transaction. Every requested seat is checked against its
//! journey's train layout before anything is written; then the order row and its tickets
//! are inserted. The `(journey, cargo, seat)` unique index decides whether a seat is free,
//! so two concurrent bookings of the same slot cannot both succeed. Any failure rolls the
//! whole order back.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{
        journey::JourneyRepository, order::OrderRepository, shared::missing_related,
        ticket::TicketRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        journey::{Journey, JourneyDetail},
        order::{BookedOrder, CreateOrderParams, Order, OrderSort},
    },
    query::{
        filter::OrderFilter,
        ordering::SortKey,
        pagination::{Page, PageRequest},
    },
    util::validation::{unique_violation, validate_seat},
};

/// Fields covered by the ticket seat slot unique index.
pub const SEAT_SLOT: &[&str] = &["journey", "cargo", "seat"];

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for one or more seats.
    ///
    /// # Returns
    /// - `Ok(BookedOrder<Journey>)` - The order with its tickets and their journeys
    /// - `Err(AppError::ValidationErr(EmptyOrder))` - No tickets requested
    /// - `Err(AppError::ValidationErr(UnknownReference))` - A ticket names an unknown journey
    /// - `Err(AppError::ValidationErr(SeatOutOfRange))` - Cargo or seat outside the train layout
    /// - `Err(AppError::ValidationErr(DuplicateEntity))` - A seat slot is already booked, or
    ///   requested twice in this order
    pub async fn create(&self, params: CreateOrderParams) -> Result<BookedOrder<Journey>, AppError> {
        if params.tickets.is_empty() {
            return Err(ValidationError::EmptyOrder.into());
        }

        let txn = self.db.begin().await?;

        let journeys = JourneyRepository::new(&txn);
        let mut layouts: HashMap<i32, (i32, i32)> = HashMap::new();
        for ticket in &params.tickets {
            let (cargo_num, places_in_cargo) = match layouts.get(&ticket.journey_id) {
                Some(layout) => *layout,
                None => {
                    let layout = journeys
                        .find_seat_layout(ticket.journey_id)
                        .await?
                        .ok_or(ValidationError::UnknownReference {
                            field: "journey",
                            id: ticket.journey_id,
                        })?;
                    layouts.insert(ticket.journey_id, layout);
                    layout
                }
            };

            validate_seat(ticket.cargo, ticket.seat, cargo_num, places_in_cargo)?;
        }

        let order = OrderRepository::new(&txn).create(params.user_id).await?;
        let tickets = TicketRepository::new(&txn);
        for ticket in params.tickets {
            tickets
                .create(order.id, ticket)
                .await
                .map_err(|e| unique_violation(e, SEAT_SLOT))?;
        }

        txn.commit().await?;

        let order = OrderRepository::new(self.db)
            .find_by_id(order.id, None)
            .await?
            .ok_or_else(|| missing_related("Order", order.id))?;

        tracing::info!(
            "User {} booked {} ticket(s) in order {}",
            order.user_id,
            order.tickets.len(),
            order.id
        );

        let journeys = JourneyRepository::new(self.db)
            .find_by_ids(Order::journey_ids(std::slice::from_ref(&order)))
            .await?;

        book(order, &journeys)
    }

    /// Gets one page of orders with their tickets.
    ///
    /// # Arguments
    /// - `owner` - `Some(user_id)` lists only that user's orders, `None` lists all
    pub async fn get_paginated(
        &self,
        owner: Option<i32>,
        filter: &OrderFilter,
        ordering: &[SortKey<OrderSort>],
        page: PageRequest,
    ) -> Result<Page<BookedOrder<Journey>>, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(owner, filter, ordering, page)
            .await?;

        let journeys = JourneyRepository::new(self.db)
            .find_by_ids(Order::journey_ids(&orders))
            .await?;

        let orders = orders
            .into_iter()
            .map(|order| book(order, &journeys))
            .collect::<Result<Vec<_>, _>>()?;

        Page::new(orders, total, page)
    }

    /// Gets an order with full journey details for each ticket.
    ///
    /// Orders of other users are reported as missing when `owner` is set.
    pub async fn get(
        &self,
        id: i32,
        owner: Option<i32>,
    ) -> Result<BookedOrder<JourneyDetail>, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(id, owner)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        let journeys = JourneyRepository::new(self.db)
            .find_details_by_ids(Order::journey_ids(std::slice::from_ref(&order)))
            .await?;

        book(order, &journeys)
    }

    /// Cancels an order, releasing all of its seats.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !OrderRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(())
    }
}

fn book<J: Clone>(order: Order, journeys: &HashMap<i32, J>) -> Result<BookedOrder<J>, AppError> {
    BookedOrder::attach(order, journeys)
        .map_err(|journey_id| missing_related("Journey", journey_id).into())
}
