//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every repository is
//! generic over `ConnectionTrait`, so the same code runs against the connection pool or
//! inside an open transaction.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod shared;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;

#[cfg(test)]
mod test;
