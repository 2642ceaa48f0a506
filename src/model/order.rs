use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::ticket::{CreateTicketDto, TicketDetailDto, TicketDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketDetailDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub tickets: Vec<CreateTicketDto>,
}
