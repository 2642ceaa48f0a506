//! SeaORM entity definitions for the train station schema.
//!
//! Each module maps one table created by the `migration` crate. Relations mirror the
//! foreign keys declared there, including the cascading deletes between owners and
//! the rows they own.

pub mod prelude;

pub mod crew;
pub mod journey;
pub mod journey_crew;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
