use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::train_type::TrainTypeDto;

/// Train as shown in listings, with the train type flattened to its name.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub capacity: i64,
    pub train_type: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainDetailDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub capacity: i64,
    pub train_type: TrainTypeDto,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTrainDto {
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    /// Train type id.
    pub train_type: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateTrainDto {
    pub name: Option<String>,
    pub cargo_num: Option<i32>,
    pub places_in_cargo: Option<i32>,
    pub train_type: Option<i32>,
}
