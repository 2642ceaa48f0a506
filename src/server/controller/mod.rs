//! HTTP request handlers.
//!
//! Controllers authenticate the caller, resolve query parameters into filters, ordering
//! and page requests, convert DTOs into params, call a service and convert the result
//! back into a DTO. Every handler carries a `utoipa::path` annotation and is registered
//! through `utoipa_axum::routes!` in the router.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod upload;
pub mod user;
