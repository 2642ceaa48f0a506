use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    model::train_type::{TrainType, TrainTypeParams, TrainTypeSort},
    query::{ordering::SortKey, pagination::PageRequest},
};

pub struct TrainTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TrainTypeParams) -> Result<TrainType, DbErr> {
        let entity = entity::train_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TrainType::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrainType>, DbErr> {
        let entity = entity::prelude::TrainType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TrainType::from_entity))
    }

    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<TrainTypeSort>],
        page: PageRequest,
    ) -> Result<(Vec<TrainType>, u64), DbErr> {
        let mut query = entity::prelude::TrainType::find();
        for key in ordering {
            let column = match key.field {
                TrainTypeSort::Id => entity::train_type::Column::Id,
                TrainTypeSort::Name => entity::train_type::Column::Name,
            };
            query = query.order_by(column, key.direction.into_order());
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let train_types = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(TrainType::from_entity)
            .collect();

        Ok((train_types, total))
    }

    pub async fn update(&self, id: i32, params: TrainTypeParams) -> Result<TrainType, DbErr> {
        let entity = entity::train_type::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
        }
        .update(self.db)
        .await?;

        Ok(TrainType::from_entity(entity))
    }

    /// Deletes a train type; its trains are removed by the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TrainType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
