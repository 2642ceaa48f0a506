use sea_orm::DatabaseConnection;

use crate::server::{
    data::{route::RouteRepository, station::StationRepository},
    error::{validation::ValidationError, AppError},
    model::route::{Route, RouteParams, RouteSort, UpdateRouteParams},
    query::{
        filter::RouteFilter,
        ordering::SortKey,
        pagination::{Page, PageRequest},
    },
    util::validation::unique_violation,
};

/// Fields covered by the route unique index.
const ENDPOINTS: &[&str] = &["source", "destination"];

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a route between two existing, distinct stations.
    ///
    /// # Returns
    /// - `Ok(Route)` - The created route with both stations
    /// - `Err(AppError::ValidationErr(InvalidRoute))` - Source equals destination
    /// - `Err(AppError::ValidationErr(DuplicateEntity))` - The same endpoints already exist
    pub async fn create(&self, params: RouteParams) -> Result<Route, AppError> {
        params.validate()?;
        self.require_stations(&params).await?;

        RouteRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_violation(e, ENDPOINTS))
    }

    pub async fn get(&self, id: i32) -> Result<Route, AppError> {
        RouteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        filter: &RouteFilter,
        ordering: &[SortKey<RouteSort>],
        page: PageRequest,
    ) -> Result<Page<Route>, AppError> {
        let (routes, total) = RouteRepository::new(self.db)
            .get_paginated(filter, ordering, page)
            .await?;

        Page::new(routes, total, page)
    }

    pub async fn update(&self, id: i32, changes: UpdateRouteParams) -> Result<Route, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;
        self.require_stations(&params).await?;

        RouteRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| unique_violation(e, ENDPOINTS))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RouteRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        Ok(())
    }

    async fn require_stations(&self, params: &RouteParams) -> Result<(), AppError> {
        let stations = StationRepository::new(self.db)
            .find_by_ids(vec![params.source_id, params.destination_id])
            .await?;

        for (field, id) in [
            ("source", params.source_id),
            ("destination", params.destination_id),
        ] {
            if !stations.contains_key(&id) {
                return Err(ValidationError::UnknownReference { field, id }.into());
            }
        }

        Ok(())
    }
}
