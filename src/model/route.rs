use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::station::StationDto;

/// Route as shown in listings, with both stations flattened to their names.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteDto {
    pub id: i32,
    pub source: String,
    pub destination: String,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteDetailDto {
    pub id: i32,
    pub source: StationDto,
    pub destination: StationDto,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRouteDto {
    /// Source station id.
    pub source: i32,
    /// Destination station id.
    pub destination: i32,
    pub distance: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateRouteDto {
    pub source: Option<i32>,
    pub destination: Option<i32>,
    pub distance: Option<i32>,
}
