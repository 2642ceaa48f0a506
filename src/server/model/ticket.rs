//! Ticket domain model and parameters.

use std::collections::HashMap;

use crate::{
    model::ticket::{CreateTicketDto, TicketDetailDto, TicketDto},
    server::{
        model::journey::{Journey, JourneyDetail},
        query::ordering::{SortField, SortKey},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey_id: i32,
    pub order_id: i32,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Self {
        Self {
            id: entity.id,
            cargo: entity.cargo,
            seat: entity.seat,
            journey_id: entity.journey_id,
            order_id: entity.order_id,
        }
    }
}

/// A ticket together with the journey it books, loaded at the detail level `J`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedTicket<J> {
    pub ticket: Ticket,
    pub journey: J,
}

impl<J: Clone> BookedTicket<J> {
    /// Pairs a ticket with its journey taken from a preloaded map.
    ///
    /// Returns `None` when the map lacks the ticket's journey.
    pub fn attach(ticket: Ticket, journeys: &HashMap<i32, J>) -> Option<Self> {
        let journey = journeys.get(&ticket.journey_id)?.clone();

        Some(Self { ticket, journey })
    }
}

impl BookedTicket<Journey> {
    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.ticket.id,
            cargo: self.ticket.cargo,
            seat: self.ticket.seat,
            order: self.ticket.order_id,
            journey: self.journey.into_dto(),
        }
    }
}

impl BookedTicket<JourneyDetail> {
    pub fn into_dto(self) -> TicketDetailDto {
        TicketDetailDto {
            id: self.ticket.id,
            cargo: self.ticket.cargo,
            seat: self.ticket.seat,
            order: self.ticket.order_id,
            journey: self.journey.into_dto(),
        }
    }
}

/// One requested seat slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketParams {
    pub cargo: i32,
    pub seat: i32,
    pub journey_id: i32,
}

impl TicketParams {
    pub fn from_dto(dto: CreateTicketDto) -> Self {
        Self {
            cargo: dto.cargo,
            seat: dto.seat,
            journey_id: dto.journey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketSort {
    Id,
    Journey,
    Cargo,
    Seat,
    /// Journey, then cargo, then seat.
    SeatSlot,
}

impl SortField for TicketSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[
        ("journey", Self::Journey),
        ("cargo", Self::Cargo),
        ("seat", Self::Seat),
    ];
    const DEFAULT: SortKey<Self> = SortKey::asc(Self::SeatSlot);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Journey => "journey",
            Self::Cargo => "cargo",
            Self::Seat => "seat",
            Self::SeatSlot => "seat_slot",
        }
    }
}
