//! Station domain model and parameters.

use crate::{
    model::station::{CreateStationDto, StationDto, UpdateStationDto},
    server::{
        error::validation::ValidationError,
        query::ordering::{SortField, SortKey},
        util::validation::validate_not_blank,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    pub fn from_entity(entity: entity::station::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            latitude: entity.latitude,
            longitude: entity.longitude,
        }
    }

    pub fn into_dto(self) -> StationDto {
        StationDto {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Complete set of writable station fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StationParams {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationParams {
    pub fn from_dto(dto: CreateStationDto) -> Self {
        Self {
            name: dto.name,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_blank("name", &self.name)
    }
}

/// Fields to change on an existing station; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStationParams {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdateStationParams {
    pub fn from_dto(dto: UpdateStationDto) -> Self {
        Self {
            name: dto.name,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }

    /// Full replacement as sent with `PUT`.
    pub fn replace(dto: CreateStationDto) -> Self {
        Self {
            name: Some(dto.name),
            latitude: Some(dto.latitude),
            longitude: Some(dto.longitude),
        }
    }

    pub fn merge(self, current: &Station) -> StationParams {
        StationParams {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            latitude: self.latitude.unwrap_or(current.latitude),
            longitude: self.longitude.unwrap_or(current.longitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationSort {
    Name,
}

impl SortField for StationSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[("name", Self::Name)];
    const DEFAULT: SortKey<Self> = SortKey::asc(Self::Name);

    fn token(self) -> &'static str {
        match self {
            Self::Name => "name",
        }
    }
}
