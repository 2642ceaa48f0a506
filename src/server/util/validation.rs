//! Domain rules checked by services before any write.
//!
//! Each check returns a `ValidationError` naming the offending field(s) instead of letting
//! the database reject the row. Uniqueness is the exception: it can only be decided by the
//! store, so `unique_violation` translates the store's constraint error after the fact.

use chrono::{DateTime, Utc};
use sea_orm::{DbErr, SqlErr};

use crate::server::error::{validation::ValidationError, AppError};

/// A route must connect two different stations.
pub fn validate_route(source_id: i32, destination_id: i32) -> Result<(), ValidationError> {
    if source_id == destination_id {
        return Err(ValidationError::InvalidRoute);
    }

    Ok(())
}

/// A journey must depart strictly before it arrives.
pub fn validate_schedule(
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if departure_time >= arrival_time {
        return Err(ValidationError::InvalidSchedule);
    }

    Ok(())
}

/// Cargo and seat numbers are 1-indexed and bounded by the train layout.
pub fn validate_seat(
    cargo: i32,
    seat: i32,
    cargo_num: i32,
    places_in_cargo: i32,
) -> Result<(), ValidationError> {
    if !(1..=cargo_num).contains(&cargo) {
        return Err(ValidationError::SeatOutOfRange {
            field: "cargo",
            value: cargo,
            max: cargo_num,
        });
    }

    if !(1..=places_in_cargo).contains(&seat) {
        return Err(ValidationError::SeatOutOfRange {
            field: "seat",
            value: seat,
            max: places_in_cargo,
        });
    }

    Ok(())
}

pub fn validate_positive(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 1 {
        return Err(ValidationError::NonPositive { field, value });
    }

    Ok(())
}

pub fn validate_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field,
            reason: "may not be blank".to_string(),
        });
    }

    Ok(())
}

/// Translates a unique constraint violation into `DuplicateEntity`.
///
/// Any other database error is passed through unchanged.
///
/// # Arguments
/// - `err` - Error returned by the failed insert or update
/// - `fields` - Field set covered by the constraint that could have fired
pub fn unique_violation(err: DbErr, fields: &[&'static str]) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ValidationError::DuplicateEntity {
            fields: fields.to_vec(),
        }
        .into(),
        _ => err.into(),
    }
}
