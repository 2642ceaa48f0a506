//! Train service: CRUD with reference checks and image upload.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{train::TrainRepository, train_type::TrainTypeRepository},
    error::{validation::ValidationError, AppError},
    model::train::{Train, TrainParams, TrainSort, UpdateTrainParams},
    query::{
        filter::TrainFilter,
        ordering::SortKey,
        pagination::{Page, PageRequest},
    },
    util::{
        media::{MediaKind, MediaStore},
        validation::unique_violation,
    },
};

pub struct TrainService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a train after checking that its train type exists.
    ///
    /// # Returns
    /// - `Ok(Train)` - The created train with its type
    /// - `Err(AppError::ValidationErr)` - Blank name, non-positive layout, unknown train type
    ///   or a name already in use
    pub async fn create(&self, params: TrainParams) -> Result<Train, AppError> {
        params.validate()?;
        self.require_train_type(params.train_type_id).await?;

        TrainRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_violation(e, &["name"]))
    }

    pub async fn get(&self, id: i32) -> Result<Train, AppError> {
        TrainRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Train not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        filter: &TrainFilter,
        ordering: &[SortKey<TrainSort>],
        page: PageRequest,
    ) -> Result<Page<Train>, AppError> {
        let (trains, total) = TrainRepository::new(self.db)
            .get_paginated(filter, ordering, page)
            .await?;

        Page::new(trains, total, page)
    }

    pub async fn update(&self, id: i32, changes: UpdateTrainParams) -> Result<Train, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;
        if params.train_type_id != current.train_type.id {
            self.require_train_type(params.train_type_id).await?;
        }

        TrainRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| unique_violation(e, &["name"]))
    }

    /// Stores an uploaded image for the train, replacing any previous one.
    ///
    /// # Returns
    /// - `Ok(Train)` - The train with its new image path
    /// - `Err(AppError::NotFound)` - No train with that id
    /// - `Err(AppError::ValidationErr(InvalidImage))` - Upload is not a supported image
    pub async fn upload_image(
        &self,
        media: &MediaStore,
        id: i32,
        bytes: &[u8],
    ) -> Result<Train, AppError> {
        let current = self.get(id).await?;
        let image = media.save_image(MediaKind::Train, &current.name, bytes).await?;

        let train = match TrainRepository::new(self.db)
            .set_image(id, Some(image.clone()))
            .await
        {
            Ok(train) => train,
            Err(e) => {
                return Err(media.discard(&image, e.into()).await);
            }
        };

        if let Some(previous) = current.image {
            if let Err(e) = media.remove(&previous).await {
                tracing::warn!("Failed to remove replaced train image {}: {}", previous, e);
            }
        }

        Ok(train)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TrainRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Train not found".to_string()));
        }

        Ok(())
    }

    async fn require_train_type(&self, id: i32) -> Result<(), AppError> {
        if TrainTypeRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(ValidationError::UnknownReference {
                field: "train_type",
                id,
            }
            .into());
        }

        Ok(())
    }
}
