use sea_orm::DatabaseConnection;

use crate::server::{
    data::{journey::JourneyRepository, shared::missing_related, ticket::TicketRepository},
    error::AppError,
    model::{
        journey::{Journey, JourneyDetail},
        ticket::{BookedTicket, TicketSort},
    },
    query::{
        ordering::SortKey,
        pagination::{Page, PageRequest},
    },
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of tickets with their journeys.
    ///
    /// # Arguments
    /// - `owner` - `Some(user_id)` lists only tickets from that user's orders, `None` lists all
    pub async fn get_paginated(
        &self,
        owner: Option<i32>,
        ordering: &[SortKey<TicketSort>],
        page: PageRequest,
    ) -> Result<Page<BookedTicket<Journey>>, AppError> {
        let (tickets, total) = TicketRepository::new(self.db)
            .get_paginated(owner, ordering, page)
            .await?;

        let mut journey_ids: Vec<i32> = tickets.iter().map(|t| t.journey_id).collect();
        journey_ids.sort_unstable();
        journey_ids.dedup();
        let journeys = JourneyRepository::new(self.db)
            .find_by_ids(journey_ids)
            .await?;

        let tickets = tickets
            .into_iter()
            .map(|ticket| {
                let journey_id = ticket.journey_id;
                BookedTicket::attach(ticket, &journeys)
                    .ok_or_else(|| missing_related("Journey", journey_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Page::new(tickets, total, page)
    }

    /// Gets a ticket with full details of its journey.
    pub async fn get(
        &self,
        id: i32,
        owner: Option<i32>,
    ) -> Result<BookedTicket<JourneyDetail>, AppError> {
        let ticket = TicketRepository::new(self.db)
            .find_by_id(id, owner)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        let journey = JourneyRepository::new(self.db)
            .find_detail_by_id(ticket.journey_id)
            .await?
            .ok_or_else(|| missing_related("Journey", ticket.journey_id))?;

        Ok(BookedTicket { ticket, journey })
    }

    /// Cancels a single ticket, releasing its seat.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TicketRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Ticket not found".to_string()));
        }

        Ok(())
    }
}
