//! Order data repository for database operations.
//!
//! Orders are returned with their tickets attached. Ownership scoping is expressed as an
//! optional user id: `Some(user_id)` restricts reads to that user's orders, `None` reads all.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{shared::within, ticket::TicketRepository},
    model::{
        order::{Order, OrderSort},
        ticket::Ticket,
    },
    query::{filter::OrderFilter, ordering::SortKey, pagination::PageRequest},
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an empty order stamped with the current time.
    ///
    /// Tickets are added separately with `TicketRepository::create`, within the same
    /// transaction.
    pub async fn create(&self, user_id: i32) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity, Vec::new()))
    }

    /// Finds an order with its tickets.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `owner` - When set, orders of other users are treated as missing
    pub async fn find_by_id(&self, id: i32, owner: Option<i32>) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id)
            .filter(owned_by(owner))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.attach_tickets(vec![entity]).await?.pop())
    }

    /// Gets one page of orders with their tickets.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders on the page and the number of matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        owner: Option<i32>,
        filter: &OrderFilter,
        ordering: &[SortKey<OrderSort>],
        page: PageRequest,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let mut condition = owned_by(owner);
        if let Some(window) = &filter.created {
            condition = condition.add(within(entity::order::Column::CreatedAt, window));
        }

        let mut query = entity::prelude::Order::find().filter(condition);
        for key in ordering {
            query = match key.field {
                OrderSort::CreatedAt => {
                    query.order_by(entity::order::Column::CreatedAt, key.direction.into_order())
                }
            };
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((self.attach_tickets(entities).await?, total))
    }

    /// Deletes an order; its tickets are removed by the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn attach_tickets(&self, entities: Vec<entity::order::Model>) -> Result<Vec<Order>, DbErr> {
        let order_ids = entities.iter().map(|o| o.id).collect();
        let tickets = TicketRepository::new(self.db)
            .find_by_orders(order_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|order| {
                let own: Vec<Ticket> = tickets
                    .iter()
                    .filter(|t| t.order_id == order.id)
                    .cloned()
                    .collect();
                Order::from_entity(order, own)
            })
            .collect())
    }
}

fn owned_by(owner: Option<i32>) -> Condition {
    match owner {
        Some(user_id) => Condition::all().add(entity::order::Column::UserId.eq(user_id)),
        None => Condition::all(),
    }
}
