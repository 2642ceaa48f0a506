//! Journey data repository for database operations.
//!
//! A journey row only carries foreign keys and the schedule. Reads fetch the journey rows
//! first and then enrich them in bulk: routes with their stations, trains with their types,
//! assigned crew and the number of issued tickets are each loaded with one query for the
//! whole page and attached in memory.

use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::collections::HashMap;

use crate::server::{
    data::{
        crew::CrewRepository,
        route::RouteRepository,
        shared::{missing_related, routes_between, within},
        ticket::TicketRepository,
        train::TrainRepository,
    },
    model::{
        crew::Crew,
        journey::{Journey, JourneyDetail, JourneyParams, JourneySort},
    },
    query::{filter::JourneyFilter, ordering::SortKey, pagination::PageRequest},
};

const SOURCE_STATION: &str = "source_station";

pub struct JourneyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JourneyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a journey and its crew assignments.
    ///
    /// Callers that need the journey and its crew to appear together must run this inside
    /// a transaction.
    ///
    /// # Returns
    /// - `Ok(Journey)` - The created journey, fully loaded
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, params: JourneyParams) -> Result<Journey, DbErr> {
        let entity = entity::journey::ActiveModel {
            route_id: ActiveValue::Set(params.route_id),
            train_id: ActiveValue::Set(params.train_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.assign_crew(entity.id, &params.crew_ids).await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| missing_related("Journey", entity.id))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Journey>, DbErr> {
        let Some(entity) = entity::prelude::Journey::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![entity]).await?.pop())
    }

    /// Finds a journey together with its taken seat slots.
    pub async fn find_detail_by_id(&self, id: i32) -> Result<Option<JourneyDetail>, DbErr> {
        let Some(journey) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut taken = TicketRepository::new(self.db).taken_places(vec![id]).await?;

        Ok(Some(JourneyDetail {
            journey,
            taken_places: taken.remove(&id).unwrap_or_default(),
        }))
    }

    /// Seat layout of the train serving a journey, as `(cargo_num, places_in_cargo)`.
    ///
    /// Booking checks seat bounds against this without loading the whole journey.
    pub async fn find_seat_layout(&self, id: i32) -> Result<Option<(i32, i32)>, DbErr> {
        let found = entity::prelude::Journey::find_by_id(id)
            .find_also_related(entity::prelude::Train)
            .one(self.db)
            .await?;

        match found {
            None => Ok(None),
            Some((_, Some(train))) => Ok(Some((train.cargo_num, train.places_in_cargo))),
            Some((journey, None)) => Err(missing_related("Train", journey.train_id)),
        }
    }

    /// Loads the given journeys keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Journey>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Journey::find()
            .filter(entity::journey::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        let journeys = self.hydrate(entities).await?;

        Ok(journeys.into_iter().map(|j| (j.id, j)).collect())
    }

    /// Loads the given journeys with their taken seat slots, keyed by id.
    pub async fn find_details_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, JourneyDetail>, DbErr> {
        let journeys = self.find_by_ids(ids.clone()).await?;
        let mut taken = TicketRepository::new(self.db).taken_places(ids).await?;

        Ok(journeys
            .into_iter()
            .map(|(id, journey)| {
                let taken_places = taken.remove(&id).unwrap_or_default();
                (
                    id,
                    JourneyDetail {
                        journey,
                        taken_places,
                    },
                )
            })
            .collect())
    }

    /// Gets one page of journeys matching the filter, in the requested order.
    ///
    /// # Arguments
    /// - `filter` - Departure/arrival calendar windows and station name fragments
    /// - `ordering` - Resolved sort keys; `route` sorts by the source station's name and
    ///   `train` by the train's name
    /// - `page` - Page number and size
    ///
    /// # Returns
    /// - `Ok((journeys, total))` - Journeys on the page and the number of matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &JourneyFilter,
        ordering: &[SortKey<JourneySort>],
        page: PageRequest,
    ) -> Result<(Vec<Journey>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(window) = &filter.departure {
            condition = condition.add(within(entity::journey::Column::DepartureTime, window));
        }
        if let Some(window) = &filter.arrival {
            condition = condition.add(within(entity::journey::Column::ArrivalTime, window));
        }
        if filter.source.is_some() || filter.destination.is_some() {
            condition = condition.add(entity::journey::Column::RouteId.in_subquery(
                routes_between(filter.source.as_deref(), filter.destination.as_deref()),
            ));
        }

        let query = apply_ordering(entity::prelude::Journey::find().filter(condition), ordering);

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let entities = paginator.fetch_page(page.index()).await?;

        Ok((self.hydrate(entities).await?, total))
    }

    /// Overwrites the journey's route, train, schedule and crew.
    ///
    /// Run inside a transaction so the crew replacement is atomic.
    pub async fn update(&self, id: i32, params: JourneyParams) -> Result<Journey, DbErr> {
        entity::journey::ActiveModel {
            id: ActiveValue::Unchanged(id),
            route_id: ActiveValue::Set(params.route_id),
            train_id: ActiveValue::Set(params.train_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
        }
        .update(self.db)
        .await?;

        entity::prelude::JourneyCrew::delete_many()
            .filter(entity::journey_crew::Column::JourneyId.eq(id))
            .exec(self.db)
            .await?;
        self.assign_crew(id, &params.crew_ids).await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| missing_related("Journey", id))
    }

    /// Deletes a journey together with its tickets and crew assignments.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Journey::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn assign_crew(&self, journey_id: i32, crew_ids: &[i32]) -> Result<(), DbErr> {
        if crew_ids.is_empty() {
            return Ok(());
        }

        let assignments = crew_ids.iter().map(|&crew_id| entity::journey_crew::ActiveModel {
            journey_id: ActiveValue::Set(journey_id),
            crew_id: ActiveValue::Set(crew_id),
        });

        entity::prelude::JourneyCrew::insert_many(assignments)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attaches route, train, crew and issued ticket count, preserving the input order.
    async fn hydrate(&self, entities: Vec<entity::journey::Model>) -> Result<Vec<Journey>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let journey_ids: Vec<i32> = entities.iter().map(|j| j.id).collect();
        let route_ids = distinct(entities.iter().map(|j| j.route_id));
        let train_ids = distinct(entities.iter().map(|j| j.train_id));

        let routes = RouteRepository::new(self.db).find_by_ids(route_ids).await?;
        let trains = TrainRepository::new(self.db).find_by_ids(train_ids).await?;
        let mut crew = self.crew_by_journey(journey_ids.clone()).await?;
        let issued = TicketRepository::new(self.db)
            .count_by_journeys(journey_ids)
            .await?;

        entities
            .into_iter()
            .map(|journey| {
                let route = routes
                    .get(&journey.route_id)
                    .cloned()
                    .ok_or_else(|| missing_related("Route", journey.route_id))?;
                let train = trains
                    .get(&journey.train_id)
                    .cloned()
                    .ok_or_else(|| missing_related("Train", journey.train_id))?;

                Ok(Journey {
                    id: journey.id,
                    route,
                    train,
                    crew: crew.remove(&journey.id).unwrap_or_default(),
                    departure_time: journey.departure_time,
                    arrival_time: journey.arrival_time,
                    tickets_issued: issued.get(&journey.id).copied().unwrap_or(0),
                })
            })
            .collect()
    }

    /// Crew assigned to each journey, ordered by crew id.
    async fn crew_by_journey(&self, journey_ids: Vec<i32>) -> Result<HashMap<i32, Vec<Crew>>, DbErr> {
        let assignments = entity::prelude::JourneyCrew::find()
            .filter(entity::journey_crew::Column::JourneyId.is_in(journey_ids))
            .order_by_asc(entity::journey_crew::Column::CrewId)
            .all(self.db)
            .await?;

        let crew_ids = distinct(assignments.iter().map(|a| a.crew_id));
        let members: HashMap<i32, Crew> = CrewRepository::new(self.db)
            .find_by_ids(crew_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut crew: HashMap<i32, Vec<Crew>> = HashMap::new();
        for assignment in assignments {
            if let Some(member) = members.get(&assignment.crew_id) {
                crew.entry(assignment.journey_id)
                    .or_default()
                    .push(member.clone());
            }
        }

        Ok(crew)
    }
}

fn distinct(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Adds `ORDER BY` clauses for the resolved keys, joining the route's source station or the
/// train when a key sorts by their names.
fn apply_ordering(
    mut query: Select<entity::journey::Entity>,
    ordering: &[SortKey<JourneySort>],
) -> Select<entity::journey::Entity> {
    if ordering.iter().any(|k| k.field == JourneySort::Route) {
        query = query
            .join(JoinType::InnerJoin, entity::journey::Relation::Route.def())
            .join_as(
                JoinType::InnerJoin,
                entity::route::Relation::Source.def(),
                Alias::new(SOURCE_STATION),
            );
    }
    if ordering.iter().any(|k| k.field == JourneySort::Train) {
        query = query.join(JoinType::InnerJoin, entity::journey::Relation::Train.def());
    }

    for key in ordering {
        let order = key.direction.into_order();
        query = match key.field {
            JourneySort::Id => query.order_by(entity::journey::Column::Id, order),
            JourneySort::DepartureTime => {
                query.order_by(entity::journey::Column::DepartureTime, order)
            }
            JourneySort::ArrivalTime => query.order_by(entity::journey::Column::ArrivalTime, order),
            JourneySort::Route => query.order_by(
                Expr::col((Alias::new(SOURCE_STATION), entity::station::Column::Name)),
                order,
            ),
            JourneySort::Train => query.order_by(entity::train::Column::Name, order),
        };
    }

    query
}
