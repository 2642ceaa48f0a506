//! Journey service.
//!
//! Writes run in a transaction: the referenced route, train and crew are checked, then the
//! journey row and its crew assignments are written together.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        crew::CrewRepository, journey::JourneyRepository, route::RouteRepository,
        train::TrainRepository,
    },
    error::{validation::ValidationError, AppError},
    model::journey::{Journey, JourneyDetail, JourneyParams, JourneySort, UpdateJourneyParams},
    query::{
        filter::JourneyFilter,
        ordering::SortKey,
        pagination::{Page, PageRequest},
    },
};

pub struct JourneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a journey.
    ///
    /// # Returns
    /// - `Ok(Journey)` - The created journey with route, train and crew
    /// - `Err(AppError::ValidationErr(InvalidSchedule))` - Departure is not before arrival
    /// - `Err(AppError::ValidationErr(UnknownReference))` - Route, train or a crew member
    ///   does not exist
    pub async fn create(&self, params: JourneyParams) -> Result<Journey, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;
        require_references(&txn, &params).await?;
        let journey = JourneyRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::debug!("Scheduled journey {} on route {}", journey.id, journey.route.id);

        Ok(journey)
    }

    pub async fn get(&self, id: i32) -> Result<Journey, AppError> {
        JourneyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Journey not found".to_string()))
    }

    /// Gets a journey with its taken seat slots.
    pub async fn get_detail(&self, id: i32) -> Result<JourneyDetail, AppError> {
        JourneyRepository::new(self.db)
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Journey not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        filter: &JourneyFilter,
        ordering: &[SortKey<JourneySort>],
        page: PageRequest,
    ) -> Result<Page<Journey>, AppError> {
        let (journeys, total) = JourneyRepository::new(self.db)
            .get_paginated(filter, ordering, page)
            .await?;

        Page::new(journeys, total, page)
    }

    /// Applies changes to a journey; fields left unset keep their current values.
    ///
    /// The merged schedule is validated as a whole, so moving only the departure past the
    /// stored arrival is rejected.
    pub async fn update(
        &self,
        id: i32,
        changes: UpdateJourneyParams,
    ) -> Result<Journey, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;

        let txn = self.db.begin().await?;
        require_references(&txn, &params).await?;
        let journey = JourneyRepository::new(&txn).update(id, params).await?;
        txn.commit().await?;

        Ok(journey)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !JourneyRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Journey not found".to_string()));
        }

        Ok(())
    }
}

async fn require_references<C: ConnectionTrait>(
    db: &C,
    params: &JourneyParams,
) -> Result<(), AppError> {
    if RouteRepository::new(db)
        .find_by_id(params.route_id)
        .await?
        .is_none()
    {
        return Err(ValidationError::UnknownReference {
            field: "route",
            id: params.route_id,
        }
        .into());
    }

    if TrainRepository::new(db)
        .find_by_id(params.train_id)
        .await?
        .is_none()
    {
        return Err(ValidationError::UnknownReference {
            field: "train",
            id: params.train_id,
        }
        .into());
    }

    let crew = CrewRepository::new(db)
        .find_by_ids(params.crew_ids.clone())
        .await?;
    if let Some(&missing) = params
        .crew_ids
        .iter()
        .find(|id| !crew.iter().any(|c| c.id == **id))
    {
        return Err(ValidationError::UnknownReference {
            field: "crew",
            id: missing,
        }
        .into());
    }

    Ok(())
}
