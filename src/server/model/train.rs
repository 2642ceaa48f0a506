//! Train domain model and parameters.
//!
//! A train's capacity is `cargo_num * places_in_cargo`; seats are addressed as
//! `(cargo, seat)` with both numbers starting at 1.

use crate::{
    model::train::{CreateTrainDto, TrainDetailDto, TrainDto, UpdateTrainDto},
    server::{
        error::validation::ValidationError,
        model::train_type::TrainType,
        query::ordering::{SortField, SortKey},
        util::{
            capacity::capacity,
            media::public_url,
            validation::{validate_not_blank, validate_positive},
        },
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: TrainType,
    /// Stored image path relative to the media root.
    pub image: Option<String>,
}

impl Train {
    pub fn from_entity(entity: entity::train::Model, train_type: entity::train_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cargo_num: entity.cargo_num,
            places_in_cargo: entity.places_in_cargo,
            train_type: TrainType::from_entity(train_type),
            image: entity.image,
        }
    }

    pub fn capacity(&self) -> i64 {
        capacity(self.cargo_num, self.places_in_cargo)
    }

    pub fn into_dto(self) -> TrainDto {
        TrainDto {
            capacity: self.capacity(),
            id: self.id,
            name: self.name,
            cargo_num: self.cargo_num,
            places_in_cargo: self.places_in_cargo,
            train_type: self.train_type.name,
            image: self.image.as_deref().map(public_url),
        }
    }

    pub fn into_detail_dto(self) -> TrainDetailDto {
        TrainDetailDto {
            capacity: self.capacity(),
            id: self.id,
            name: self.name,
            cargo_num: self.cargo_num,
            places_in_cargo: self.places_in_cargo,
            train_type: self.train_type.into_dto(),
            image: self.image.as_deref().map(public_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainParams {
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type_id: i32,
}

impl TrainParams {
    pub fn from_dto(dto: CreateTrainDto) -> Self {
        Self {
            name: dto.name,
            cargo_num: dto.cargo_num,
            places_in_cargo: dto.places_in_cargo,
            train_type_id: dto.train_type,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_blank("name", &self.name)?;
        validate_positive("cargo_num", self.cargo_num)?;
        validate_positive("places_in_cargo", self.places_in_cargo)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTrainParams {
    pub name: Option<String>,
    pub cargo_num: Option<i32>,
    pub places_in_cargo: Option<i32>,
    pub train_type_id: Option<i32>,
}

impl UpdateTrainParams {
    pub fn from_dto(dto: UpdateTrainDto) -> Self {
        Self {
            name: dto.name,
            cargo_num: dto.cargo_num,
            places_in_cargo: dto.places_in_cargo,
            train_type_id: dto.train_type,
        }
    }

    pub fn replace(dto: CreateTrainDto) -> Self {
        Self {
            name: Some(dto.name),
            cargo_num: Some(dto.cargo_num),
            places_in_cargo: Some(dto.places_in_cargo),
            train_type_id: Some(dto.train_type),
        }
    }

    pub fn merge(self, current: &Train) -> TrainParams {
        TrainParams {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            cargo_num: self.cargo_num.unwrap_or(current.cargo_num),
            places_in_cargo: self.places_in_cargo.unwrap_or(current.places_in_cargo),
            train_type_id: self.train_type_id.unwrap_or(current.train_type.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainSort {
    Id,
    Name,
    CargoNum,
    PlacesInCargo,
    /// Name of the train type.
    TrainType,
}

impl SortField for TrainSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[
        ("name", Self::Name),
        ("cargo_num", Self::CargoNum),
        ("places_in_cargo", Self::PlacesInCargo),
        ("train_type", Self::TrainType),
    ];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::Id);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::CargoNum => "cargo_num",
            Self::PlacesInCargo => "places_in_cargo",
            Self::TrainType => "train_type",
        }
    }
}
