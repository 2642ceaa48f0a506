//! Train data repository for database operations.
//!
//! Trains are always loaded together with their train type, so every read joins
//! `train_type` and converts the pair into the `Train` domain model.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::shared::{contains, missing_related},
    model::train::{Train, TrainParams, TrainSort},
    query::{filter::TrainFilter, ordering::SortKey, pagination::PageRequest},
    util::parse::search_key,
};

pub struct TrainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new train and returns it with its train type.
    ///
    /// # Returns
    /// - `Ok(Train)` - The created train
    /// - `Err(DbErr)` - Database error, including a unique violation on the name or a foreign
    ///   key violation on the train type
    pub async fn create(&self, params: TrainParams) -> Result<Train, DbErr> {
        let entity = entity::train::ActiveModel {
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            cargo_num: ActiveValue::Set(params.cargo_num),
            places_in_cargo: ActiveValue::Set(params.places_in_cargo),
            train_type_id: ActiveValue::Set(params.train_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| missing_related("Train", entity.id))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Train>, DbErr> {
        let result = entity::prelude::Train::find_by_id(id)
            .find_also_related(entity::prelude::TrainType)
            .one(self.db)
            .await?;

        result.map(hydrate).transpose()
    }

    /// Loads the given trains keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Train>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::Train::find()
            .filter(entity::train::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::TrainType)
            .all(self.db)
            .await?
            .into_iter()
            .map(|pair| hydrate(pair).map(|train| (train.id, train)))
            .collect()
    }

    /// Gets one page of trains matching the filter, in the requested order.
    ///
    /// # Arguments
    /// - `filter` - Train type membership and name substring; absent parts do not filter
    /// - `ordering` - Resolved sort keys; `train_type` sorts by the type's name
    /// - `page` - Page number and size
    ///
    /// # Returns
    /// - `Ok((trains, total))` - Trains on the page and the number of matching rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &TrainFilter,
        ordering: &[SortKey<TrainSort>],
        page: PageRequest,
    ) -> Result<(Vec<Train>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(train_types) = &filter.train_type {
            condition = condition.add(entity::train::Column::TrainTypeId.is_in(train_types.clone()));
        }
        if let Some(name) = &filter.name {
            condition = condition.add(contains(entity::train::Column::NameSearch, name));
        }

        let mut query = entity::prelude::Train::find()
            .filter(condition)
            .find_also_related(entity::prelude::TrainType);
        for key in ordering {
            let order = key.direction.into_order();
            query = match key.field {
                TrainSort::Id => query.order_by(entity::train::Column::Id, order),
                TrainSort::Name => query.order_by(entity::train::Column::Name, order),
                TrainSort::CargoNum => query.order_by(entity::train::Column::CargoNum, order),
                TrainSort::PlacesInCargo => {
                    query.order_by(entity::train::Column::PlacesInCargo, order)
                }
                TrainSort::TrainType => query.order_by(entity::train_type::Column::Name, order),
            };
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let trains = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(hydrate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((trains, total))
    }

    /// Overwrites every writable field of a train, keeping its image.
    pub async fn update(&self, id: i32, params: TrainParams) -> Result<Train, DbErr> {
        entity::train::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            cargo_num: ActiveValue::Set(params.cargo_num),
            places_in_cargo: ActiveValue::Set(params.places_in_cargo),
            train_type_id: ActiveValue::Set(params.train_type_id),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| missing_related("Train", id))
    }

    /// Stores the media-relative path of the train's image.
    pub async fn set_image(&self, id: i32, image: Option<String>) -> Result<Train, DbErr> {
        entity::train::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image: ActiveValue::Set(image),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| missing_related("Train", id))
    }

    /// Deletes a train together with its journeys and their tickets.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Train::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn hydrate(
    (train, train_type): (entity::train::Model, Option<entity::train_type::Model>),
) -> Result<Train, DbErr> {
    let train_type = train_type.ok_or_else(|| missing_related("Train type", train.train_type_id))?;

    Ok(Train::from_entity(train, train_type))
}
