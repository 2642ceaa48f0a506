//! Station data repository for database operations.
//!
//! Provides `StationRepository` for creating, reading, updating and deleting stations.
//! The `(latitude, longitude)` uniqueness is enforced by a unique index; violations surface
//! as `DbErr` and are translated by the service layer.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    model::station::{Station, StationParams, StationSort},
    query::{ordering::SortKey, pagination::PageRequest},
    util::parse::search_key,
};

pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new station.
    ///
    /// # Returns
    /// - `Ok(Station)` - The created station
    /// - `Err(DbErr)` - Database error, including a unique violation on the coordinates
    pub async fn create(&self, params: StationParams) -> Result<Station, DbErr> {
        let entity = entity::station::ActiveModel {
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Station>, DbErr> {
        let entity = entity::prelude::Station::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Station::from_entity))
    }

    /// Loads the given stations keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Station>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let stations = entity::prelude::Station::find()
            .filter(entity::station::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, Station::from_entity(s)))
            .collect();

        Ok(stations)
    }

    /// Gets one page of stations in the requested order.
    ///
    /// # Returns
    /// - `Ok((stations, total))` - Stations on the page and the total row count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<StationSort>],
        page: PageRequest,
    ) -> Result<(Vec<Station>, u64), DbErr> {
        let mut query = entity::prelude::Station::find();
        for key in ordering {
            query = match key.field {
                StationSort::Name => {
                    query.order_by(entity::station::Column::Name, key.direction.into_order())
                }
            };
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let stations = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Station::from_entity)
            .collect();

        Ok((stations, total))
    }

    /// Overwrites every writable field of a station.
    pub async fn update(&self, id: i32, params: StationParams) -> Result<Station, DbErr> {
        let entity = entity::station::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
        }
        .update(self.db)
        .await?;

        Ok(Station::from_entity(entity))
    }

    /// Deletes a station along with its routes, their journeys and tickets.
    ///
    /// # Returns
    /// - `Ok(true)` - Station deleted
    /// - `Ok(false)` - No station with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Station::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
