//! Crew domain model and parameters.

use crate::{
    model::crew::{CreateCrewDto, CrewDto, UpdateCrewDto},
    server::{
        error::validation::ValidationError,
        query::ordering::{SortField, SortKey},
        util::{media::public_url, validation::validate_not_blank},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crew {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

impl Crew {
    pub fn from_entity(entity: entity::crew::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            image: entity.image,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> CrewDto {
        CrewDto {
            full_name: self.full_name(),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            image: self.image.as_deref().map(public_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewParams {
    pub first_name: String,
    pub last_name: String,
}

impl CrewParams {
    pub fn from_dto(dto: CreateCrewDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_blank("first_name", &self.first_name)?;
        validate_not_blank("last_name", &self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCrewParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateCrewParams {
    pub fn from_dto(dto: UpdateCrewDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    pub fn replace(dto: CreateCrewDto) -> Self {
        Self {
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
        }
    }

    pub fn merge(self, current: &Crew) -> CrewParams {
        CrewParams {
            first_name: self
                .first_name
                .unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewSort {
    Id,
    FirstName,
    LastName,
}

impl SortField for CrewSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[
        ("first_name", Self::FirstName),
        ("last_name", Self::LastName),
    ];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::Id);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}
