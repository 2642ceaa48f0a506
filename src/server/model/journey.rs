//! Journey domain model and parameters.
//!
//! `tickets_issued` is counted when the journey is loaded; availability is derived from it
//! on every read and never stored.

use chrono::{DateTime, Utc};

use crate::{
    model::journey::{
        CreateJourneyDto, JourneyDetailDto, JourneyDto, SeatDto, UpdateJourneyDto,
    },
    server::{
        error::validation::ValidationError,
        model::{crew::Crew, route::Route, train::Train},
        query::ordering::{SortField, SortKey},
        util::{capacity::tickets_available, validation::validate_schedule},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub id: i32,
    pub route: Route,
    pub train: Train,
    pub crew: Vec<Crew>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets_issued: u64,
}

impl Journey {
    pub fn tickets_available(&self) -> i64 {
        tickets_available(
            self.train.cargo_num,
            self.train.places_in_cargo,
            self.tickets_issued,
        )
    }

    pub fn into_dto(self) -> JourneyDto {
        JourneyDto {
            tickets_available: self.tickets_available(),
            route: self.route.label(),
            crew: self.crew.iter().map(Crew::full_name).collect(),
            id: self.id,
            train: self.train.name,
            train_type: self.train.train_type.name,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
        }
    }
}

/// Journey with the seats already booked on it.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyDetail {
    pub journey: Journey,
    /// Booked `(cargo, seat)` pairs, ordered by cargo then seat.
    pub taken_places: Vec<(i32, i32)>,
}

impl JourneyDetail {
    pub fn into_dto(self) -> JourneyDetailDto {
        let journey = self.journey;

        JourneyDetailDto {
            tickets_available: journey.tickets_available(),
            id: journey.id,
            route: journey.route.into_dto(),
            train: journey.train.into_dto(),
            crew: journey.crew.into_iter().map(Crew::into_dto).collect(),
            departure_time: journey.departure_time,
            arrival_time: journey.arrival_time,
            taken_places: self
                .taken_places
                .into_iter()
                .map(|(cargo, seat)| SeatDto { cargo, seat })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyParams {
    pub route_id: i32,
    pub train_id: i32,
    pub crew_ids: Vec<i32>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl JourneyParams {
    pub fn from_dto(dto: CreateJourneyDto) -> Self {
        let mut crew_ids = dto.crew;
        crew_ids.sort_unstable();
        crew_ids.dedup();

        Self {
            route_id: dto.route,
            train_id: dto.train,
            crew_ids,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_schedule(self.departure_time, self.arrival_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateJourneyParams {
    pub route_id: Option<i32>,
    pub train_id: Option<i32>,
    pub crew_ids: Option<Vec<i32>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}

impl UpdateJourneyParams {
    pub fn from_dto(dto: UpdateJourneyDto) -> Self {
        Self {
            route_id: dto.route,
            train_id: dto.train,
            crew_ids: dto.crew,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
        }
    }

    pub fn replace(dto: CreateJourneyDto) -> Self {
        Self {
            route_id: Some(dto.route),
            train_id: Some(dto.train),
            crew_ids: Some(dto.crew),
            departure_time: Some(dto.departure_time),
            arrival_time: Some(dto.arrival_time),
        }
    }

    pub fn merge(self, current: &Journey) -> JourneyParams {
        let mut crew_ids = self
            .crew_ids
            .unwrap_or_else(|| current.crew.iter().map(|c| c.id).collect());
        crew_ids.sort_unstable();
        crew_ids.dedup();

        JourneyParams {
            route_id: self.route_id.unwrap_or(current.route.id),
            train_id: self.train_id.unwrap_or(current.train.id),
            crew_ids,
            departure_time: self.departure_time.unwrap_or(current.departure_time),
            arrival_time: self.arrival_time.unwrap_or(current.arrival_time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneySort {
    Id,
    /// Name of the route's source station.
    Route,
    /// Name of the train.
    Train,
    DepartureTime,
    ArrivalTime,
}

impl SortField for JourneySort {
    const WHITELIST: &'static [(&'static str, Self)] = &[
        ("route", Self::Route),
        ("train", Self::Train),
        ("departure_time", Self::DepartureTime),
        ("arrival_time", Self::ArrivalTime),
    ];
    const DEFAULT: SortKey<Self> = SortKey::desc(Self::Id);

    fn token(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Route => "route",
            Self::Train => "train",
            Self::DepartureTime => "departure_time",
            Self::ArrivalTime => "arrival_time",
        }
    }
}
