use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::journey::{JourneyDetailDto, JourneyDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub order: i32,
    pub journey: JourneyDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDetailDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub order: i32,
    pub journey: JourneyDetailDto,
}

/// One seat requested as part of an order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTicketDto {
    pub cargo: i32,
    pub seat: i32,
    /// Journey id.
    pub journey: i32,
}
