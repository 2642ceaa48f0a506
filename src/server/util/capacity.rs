//! Seat capacity arithmetic.
//!
//! Availability is derived on every read from the train layout and the number of issued
//! tickets. It is never stored and never used to admit or reject a booking: a seat is
//! taken exactly when a ticket holds its `(journey, cargo, seat)` slot.

/// Total number of seats on a train.
pub fn capacity(cargo_num: i32, places_in_cargo: i32) -> i64 {
    i64::from(cargo_num) * i64::from(places_in_cargo)
}

/// Seats still free on a journey given the number of tickets issued for it.
pub fn tickets_available(cargo_num: i32, places_in_cargo: i32, issued: u64) -> i64 {
    capacity(cargo_num, places_in_cargo).saturating_sub(i64::try_from(issued).unwrap_or(i64::MAX))
}
