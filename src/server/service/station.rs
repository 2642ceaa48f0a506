use sea_orm::DatabaseConnection;

use crate::server::{
    data::station::StationRepository,
    error::AppError,
    model::station::{Station, StationParams, StationSort, UpdateStationParams},
    query::{ordering::SortKey, pagination::{Page, PageRequest}},
    util::validation::unique_violation,
};

/// Fields covered by the station unique index.
const COORDINATES: &[&str] = &["latitude", "longitude"];

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: StationParams) -> Result<Station, AppError> {
        params.validate()?;

        StationRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_violation(e, COORDINATES))
    }

    pub async fn get(&self, id: i32) -> Result<Station, AppError> {
        StationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Station not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<StationSort>],
        page: PageRequest,
    ) -> Result<Page<Station>, AppError> {
        let (stations, total) = StationRepository::new(self.db)
            .get_paginated(ordering, page)
            .await?;

        Page::new(stations, total, page)
    }

    /// Applies a full or partial update on top of the stored station.
    pub async fn update(&self, id: i32, changes: UpdateStationParams) -> Result<Station, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;

        StationRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| unique_violation(e, COORDINATES))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Station not found".to_string()));
        }

        Ok(())
    }
}
