use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::crew::{Crew, CrewParams, CrewSort},
    query::{ordering::SortKey, pagination::PageRequest},
};

pub struct CrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CrewParams) -> Result<Crew, DbErr> {
        let entity = entity::crew::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Crew::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Crew>, DbErr> {
        let entity = entity::prelude::Crew::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Crew::from_entity))
    }

    /// Loads the given crew members ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Crew>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let crew = entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(ids))
            .order_by_asc(entity::crew::Column::Id)
            .all(self.db)
            .await?;

        Ok(crew.into_iter().map(Crew::from_entity).collect())
    }

    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<CrewSort>],
        page: PageRequest,
    ) -> Result<(Vec<Crew>, u64), DbErr> {
        let mut query = entity::prelude::Crew::find();
        for key in ordering {
            let column = match key.field {
                CrewSort::Id => entity::crew::Column::Id,
                CrewSort::FirstName => entity::crew::Column::FirstName,
                CrewSort::LastName => entity::crew::Column::LastName,
            };
            query = query.order_by(column, key.direction.into_order());
        }

        let paginator = query.paginate(self.db, page.per_page);
        let total = paginator.num_items().await?;
        if !page.exists_within(total) {
            return Ok((Vec::new(), total));
        }
        let crew = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Crew::from_entity)
            .collect();

        Ok((crew, total))
    }

    pub async fn update(&self, id: i32, params: CrewParams) -> Result<Crew, DbErr> {
        let entity = entity::crew::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Crew::from_entity(entity))
    }

    /// Stores the media-relative path of the crew member's photo.
    pub async fn set_image(&self, id: i32, image: Option<String>) -> Result<Crew, DbErr> {
        let entity = entity::crew::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image: ActiveValue::Set(image),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Crew::from_entity(entity))
    }

    /// Deletes a crew member; journey assignments go with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Crew::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
