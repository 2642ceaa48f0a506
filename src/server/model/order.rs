//! Order domain model and parameters.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{
    model::{
        order::{CreateOrderDto, OrderDetailDto, OrderDto},
        ticket::{TicketDetailDto, TicketDto},
    },
    server::{
        model::{
            journey::{Journey, JourneyDetail},
            ticket::{BookedTicket, Ticket, TicketParams},
        },
        query::ordering::{SortField, SortKey},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    /// Ordered by journey, cargo, seat.
    pub tickets: Vec<Ticket>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, tickets: Vec<Ticket>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            tickets,
        }
    }

    /// Ids of the journeys booked by the given orders, without duplicates.
    pub fn journey_ids(orders: &[Order]) -> Vec<i32> {
        let mut ids: Vec<i32> = orders
            .iter()
            .flat_map(|o| o.tickets.iter().map(|t| t.journey_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// An order whose tickets carry their journeys at the detail level `J`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedOrder<J> {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<BookedTicket<J>>,
}

impl<J: Clone> BookedOrder<J> {
    /// Attaches each ticket's journey from a preloaded map.
    ///
    /// Returns `Err(journey_id)` for the first ticket whose journey the map lacks.
    pub fn attach(order: Order, journeys: &HashMap<i32, J>) -> Result<Self, i32> {
        let tickets = order
            .tickets
            .into_iter()
            .map(|ticket| {
                let journey_id = ticket.journey_id;
                BookedTicket::attach(ticket, journeys).ok_or(journey_id)
            })
            .collect::<Result<Vec<_>, i32>>()?;

        Ok(Self {
            id: order.id,
            user_id: order.user_id,
            created_at: order.created_at,
            tickets,
        })
    }
}

impl BookedOrder<Journey> {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self
                .tickets
                .into_iter()
                .map(BookedTicket::<Journey>::into_dto)
                .collect::<Vec<TicketDto>>(),
        }
    }
}

impl BookedOrder<JourneyDetail> {
    pub fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            id: self.id,
            created_at: self.created_at,
            tickets: self
                .tickets
                .into_iter()
                .map(BookedTicket::<JourneyDetail>::into_dto)
                .collect::<Vec<TicketDetailDto>>(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub tickets: Vec<TicketParams>,
}

impl CreateOrderParams {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            user_id,
            tickets: dto.tickets.into_iter().map(TicketParams::from_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    CreatedAt,
}

impl SortField for OrderSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[("created_at", Self::CreatedAt)];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::CreatedAt);

    fn token(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
        }
    }
}
