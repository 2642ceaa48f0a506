use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input rejected before, or at, the persistence boundary.
///
/// Every variant knows which request fields it concerns so clients can point at them.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Source and destination can't be the same station")]
    InvalidRoute,

    #[error("Departure time must be earlier than arrival time")]
    InvalidSchedule,

    /// Cargo or seat number outside the train's layout.
    #[error("{field} must be in range [1, {max}], got {value}")]
    SeatOutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// A uniqueness constraint rejected the write.
    #[error("An entry with the same {} already exists", .fields.join(", "))]
    DuplicateEntity { fields: Vec<&'static str> },

    #[error("An order must contain at least one ticket")]
    EmptyOrder,

    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: i32 },

    /// A referenced row (station, train type, journey, ...) does not exist.
    #[error("{field} refers to unknown id {id}")]
    UnknownReference { field: &'static str, id: i32 },

    #[error("{field} {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Upload a valid image. {0}")]
    InvalidImage(String),
}

impl ValidationError {
    /// Request fields the error refers to.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidRoute => vec!["source", "destination"],
            Self::InvalidSchedule => vec!["departure_time", "arrival_time"],
            Self::SeatOutOfRange { field, .. }
            | Self::NonPositive { field, .. }
            | Self::UnknownReference { field, .. }
            | Self::InvalidField { field, .. } => vec![field],
            Self::DuplicateEntity { fields } => fields.clone(),
            Self::EmptyOrder => vec!["tickets"],
            Self::InvalidImage(_) => vec!["image"],
        }
    }
}

/// Converts validation errors into HTTP responses.
///
/// - `DuplicateEntity` → 409 Conflict
/// - everything else → 400 Bad Request
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateEntity { .. } => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = ErrorDto {
            error: self.to_string(),
            fields: self.fields().into_iter().map(String::from).collect(),
        };

        (status, Json(body)).into_response()
    }
}
