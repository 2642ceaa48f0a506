use sea_orm::DatabaseConnection;

use crate::server::{
    data::crew::CrewRepository,
    error::AppError,
    model::crew::{Crew, CrewParams, CrewSort, UpdateCrewParams},
    query::{ordering::SortKey, pagination::{Page, PageRequest}},
    util::media::{MediaKind, MediaStore},
};

pub struct CrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CrewParams) -> Result<Crew, AppError> {
        params.validate()?;

        Ok(CrewRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Crew, AppError> {
        CrewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        ordering: &[SortKey<CrewSort>],
        page: PageRequest,
    ) -> Result<Page<Crew>, AppError> {
        let (crew, total) = CrewRepository::new(self.db)
            .get_paginated(ordering, page)
            .await?;

        Page::new(crew, total, page)
    }

    pub async fn update(&self, id: i32, changes: UpdateCrewParams) -> Result<Crew, AppError> {
        let current = self.get(id).await?;
        let params = changes.merge(&current);
        params.validate()?;

        Ok(CrewRepository::new(self.db).update(id, params).await?)
    }

    /// Stores an uploaded photo for the crew member, replacing any previous one.
    pub async fn upload_image(
        &self,
        media: &MediaStore,
        id: i32,
        bytes: &[u8],
    ) -> Result<Crew, AppError> {
        let current = self.get(id).await?;
        let image = media
            .save_image(MediaKind::Crew, &current.full_name(), bytes)
            .await?;

        let crew = match CrewRepository::new(self.db)
            .set_image(id, Some(image.clone()))
            .await
        {
            Ok(crew) => crew,
            Err(e) => {
                return Err(media.discard(&image, e.into()).await);
            }
        };

        if let Some(previous) = current.image {
            if let Err(e) = media.remove(&previous).await {
                tracing::warn!("Failed to remove replaced crew image {}: {}", previous, e);
            }
        }

        Ok(crew)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CrewRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Crew member not found".to_string()));
        }

        Ok(())
    }
}
