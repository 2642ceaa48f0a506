//! Route data repository for database operations.
//!
//! A route references two stations. Pages of routes are fetched first, then both endpoint
//! stations are bulk-loaded in one query and attached in memory. Sorting by station name
//! joins the station table under an alias per endpoint.

use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::{
        shared::{missing_related, route_endpoints},
        station::StationRepository,
    },
    model::route::{Route, RouteParams, RouteSort},
    query::{
        filter::RouteFilter,
        ordering::{Direction, SortKey},
        pagination::PageRequest,
    },
};

const SOURCE_STATION: &str = "source_station";
const DESTINATION_STATION: &str = "destination_station";

pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new route.
    ///
    /// # Returns
    /// - `Ok(Route)` - The created route with both stations
    /// - `Err(DbErr)` - Database error, including a unique violation on the endpoint pair
    pub async fn create(&self, params: RouteParams) -> Result<Route, DbErr> {
        let entity = entity::route::ActiveModel {
            source_id: ActiveValue::Set(params.source_id),
            destination_id: ActiveValue::Set(params.destination_id),
            distance: ActiveValue::Set(params.distance),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.hydrate_one(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Route>, DbErr> {
        let Some(entity) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.hydrate_one(entity).await.map(Some)
    }

    /// Loads the given routes keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Route>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        let routes = self.hydrate(entities).await?;

        Ok(routes.into_iter().map(|r| (r.id, r)).collect())
    }

    /// Gets one page of routes matching the filter, in the requested order.
    ///
    /// # Returns
    /// - `Ok((routes, total))` - Routes on the page and the number of matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &RouteFilter,
        ordering: &[SortKey<RouteSort>],
        page: PageRequest,
    ) -> Result<(Vec<Route>, u64), DbErr> {
        let query = entity::prelude::Route::find().filter(route_endpoints(
            filter.source.as_deref(),
            filter.destination.as_deref(),
        ));
        let query = apply_ordering(query, ordering);

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((self.hydrate(entities).await?, total))
    }

    pub async fn update(&self, id: i32, params: RouteParams) -> Result<Route, DbErr> {
        let entity = entity::route::ActiveModel {
            id: ActiveValue::Unchanged(id),
            source_id: ActiveValue::Set(params.source_id),
            destination_id: ActiveValue::Set(params.destination_id),
            distance: ActiveValue::Set(params.distance),
        }
        .update(self.db)
        .await?;

        self.hydrate_one(entity).await
    }

    /// Deletes a route together with its journeys and their tickets.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Route::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn hydrate_one(&self, entity: entity::route::Model) -> Result<Route, DbErr> {
        let id = entity.id;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or_else(|| missing_related("Route", id))
    }

    /// Attaches source and destination stations, preserving the input order.
    async fn hydrate(&self, entities: Vec<entity::route::Model>) -> Result<Vec<Route>, DbErr> {
        let mut station_ids: Vec<i32> = entities
            .iter()
            .flat_map(|r| [r.source_id, r.destination_id])
            .collect();
        station_ids.sort_unstable();
        station_ids.dedup();

        let stations = StationRepository::new(self.db)
            .find_by_ids(station_ids)
            .await?;

        entities
            .into_iter()
            .map(|route| {
                let source = stations
                    .get(&route.source_id)
                    .cloned()
                    .ok_or_else(|| missing_related("Station", route.source_id))?;
                let destination = stations
                    .get(&route.destination_id)
                    .cloned()
                    .ok_or_else(|| missing_related("Station", route.destination_id))?;

                Ok(Route {
                    id: route.id,
                    source,
                    destination,
                    distance: route.distance,
                })
            })
            .collect()
    }
}

/// Adds `ORDER BY` clauses for the resolved keys, joining endpoint stations when a key
/// sorts by station name.
fn apply_ordering(
    mut query: Select<entity::route::Entity>,
    ordering: &[SortKey<RouteSort>],
) -> Select<entity::route::Entity> {
    if ordering.iter().any(|k| k.field == RouteSort::Source) {
        query = query.join_as(
            JoinType::InnerJoin,
            entity::route::Relation::Source.def(),
            Alias::new(SOURCE_STATION),
        );
    }
    if ordering.iter().any(|k| k.field == RouteSort::Destination) {
        query = query.join_as(
            JoinType::InnerJoin,
            entity::route::Relation::Destination.def(),
            Alias::new(DESTINATION_STATION),
        );
    }

    for key in ordering {
        query = order_route_by(query, key.field, key.direction);
    }

    query
}

fn order_route_by(
    query: Select<entity::route::Entity>,
    field: RouteSort,
    direction: Direction,
) -> Select<entity::route::Entity> {
    let order = direction.into_order();

    match field {
        RouteSort::Id => query.order_by(entity::route::Column::Id, order),
        RouteSort::Distance => query.order_by(entity::route::Column::Distance, order),
        RouteSort::Source => query.order_by(
            Expr::col((Alias::new(SOURCE_STATION), entity::station::Column::Name)),
            order,
        ),
        RouteSort::Destination => query.order_by(
            Expr::col((Alias::new(DESTINATION_STATION), entity::station::Column::Name)),
            order,
        ),
    }
}
