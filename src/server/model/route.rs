//! Route domain model and parameters.

use crate::{
    model::route::{CreateRouteDto, RouteDetailDto, RouteDto, UpdateRouteDto},
    server::{
        error::validation::ValidationError,
        model::station::Station,
        query::ordering::{SortField, SortKey},
        util::validation::{validate_positive, validate_route},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: i32,
    pub source: Station,
    pub destination: Station,
    pub distance: i32,
}

impl Route {
    /// `"Source -> Destination"`
    pub fn label(&self) -> String {
        format!("{} -> {}", self.source.name, self.destination.name)
    }

    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.id,
            source: self.source.name,
            destination: self.destination.name,
            distance: self.distance,
        }
    }

    pub fn into_detail_dto(self) -> RouteDetailDto {
        RouteDetailDto {
            id: self.id,
            source: self.source.into_dto(),
            destination: self.destination.into_dto(),
            distance: self.distance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: i32,
}

impl RouteParams {
    pub fn from_dto(dto: CreateRouteDto) -> Self {
        Self {
            source_id: dto.source,
            destination_id: dto.destination,
            distance: dto.distance,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_route(self.source_id, self.destination_id)?;
        validate_positive("distance", self.distance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRouteParams {
    pub source_id: Option<i32>,
    pub destination_id: Option<i32>,
    pub distance: Option<i32>,
}

impl UpdateRouteParams {
    pub fn from_dto(dto: UpdateRouteDto) -> Self {
        Self {
            source_id: dto.source,
            destination_id: dto.destination,
            distance: dto.distance,
        }
    }

    pub fn replace(dto: CreateRouteDto) -> Self {
        Self {
            source_id: Some(dto.source),
            destination_id: Some(dto.destination),
            distance: Some(dto.distance),
        }
    }

    pub fn merge(self, current: &Route) -> RouteParams {
        RouteParams {
            source_id: self.source_id.unwrap_or(current.source.id),
            destination_id: self.destination_id.unwrap_or(current.destination.id),
            distance: self.distance.unwrap_or(current.distance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSort {
    Id,
    /// Name of the source station.
    Source,
    /// Name of the destination station.
    Destination,
    Distance,
}

impl SortField for RouteSort {
    const WHITELIST: &'static [(&'static str, Self)] = &[
        ("source", Self::Source),
        ("destination", Self::Destination),
        ("distance", Self::Distance),
    ];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::Id);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Distance => "distance",
        }
    }
}
