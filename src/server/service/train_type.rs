use sea_orm::DatabaseConnection;

use crate::server::{
    data::train_type::TrainTypeRepository,
    error::AppError,
    model::train_type::{TrainType, TrainTypeParams, TrainTypeSort, UpdateTrainTypeParams},
    query::{ordering::SortKey, pagination::{Page, PageRequest}},
    util::validation::unique_violation,
};

pub struct TrainTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TrainTypeParams) -> Result<TrainType, AppError> {
        params.validate()?;

        TrainTypeRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_violation(e, &["name"]))
    }

    pub async fn get(&self, id: i32) -> Result<TrainType, AppError> {
        TrainTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Train type not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<TrainTypeSort>],
        page: PageRequest,
    ) -> Result<Page<TrainType>, AppError> {
        let (train_types, total) = TrainTypeRepository::new(self.db)
            .get_paginated(ordering, page)
            .await?;

        Page::new(train_types, total, page)
    }

    pub async fn update(
        &self,
        id: i32,
        changes: UpdateTrainTypeParams,
    ) -> Result<TrainType, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;

        TrainTypeRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| unique_violation(e, &["name"]))
    }

    /// Deletes a train type and, through the cascade, every train of that type.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TrainTypeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Train type not found".to_string()));
        }

        Ok(())
    }
}
