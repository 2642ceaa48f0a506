//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry validated input from controllers
//! to services; `Update*Params` hold only the fields to change and are merged with the
//! current row before validation, so `PUT` and `PATCH` share one code path. Each entity
//! also declares its sortable fields here.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
