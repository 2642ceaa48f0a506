use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{crew::CrewDto, route::RouteDto, train::TrainDto};

/// Journey summary used in listings and nested inside tickets.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JourneyDto {
    pub id: i32,
    /// `"Source -> Destination"`
    pub route: String,
    pub train: String,
    pub train_type: String,
    /// Crew members' full names.
    pub crew: Vec<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets_available: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JourneyDetailDto {
    pub id: i32,
    pub route: RouteDto,
    pub train: TrainDto,
    pub crew: Vec<CrewDto>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub tickets_available: i64,
    pub taken_places: Vec<SeatDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct SeatDto {
    pub cargo: i32,
    pub seat: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateJourneyDto {
    /// Route id.
    pub route: i32,
    /// Train id.
    pub train: i32,
    /// Crew member ids.
    #[serde(default)]
    pub crew: Vec<i32>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateJourneyDto {
    pub route: Option<i32>,
    pub train: Option<i32>,
    pub crew: Option<Vec<i32>>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}
