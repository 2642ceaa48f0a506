//! Train type domain model and parameters.

use crate::{
    model::train_type::{CreateTrainTypeDto, TrainTypeDto, UpdateTrainTypeDto},
    server::{
        error::validation::ValidationError,
        query::ordering::{SortField, SortKey},
        util::validation::validate_not_blank,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainType {
    pub id: i32,
    pub name: String,
}

impl TrainType {
    pub fn from_entity(entity: entity::train_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TrainTypeDto {
        TrainTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTypeParams {
    pub name: String,
}

impl TrainTypeParams {
    pub fn from_dto(dto: CreateTrainTypeDto) -> Self {
        Self { name: dto.name }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_blank("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTrainTypeParams {
    pub name: Option<String>,
}

impl UpdateTrainTypeParams {
    pub fn from_dto(dto: UpdateTrainTypeDto) -> Self {
        Self { name: dto.name }
    }

    pub fn replace(dto: CreateTrainTypeDto) -> Self {
        Self {
            name: Some(dto.name),
        }
    }

    pub fn merge(self, current: &TrainType) -> TrainTypeParams {
        TrainTypeParams {
            name: self.name.unwrap_or_else(|| current.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainTypeSort {
    Id,
    Name,
}

impl SortField for TrainTypeSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[("name", Self::Name)];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::Id);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}
