//! Data transfer objects shared by the HTTP API.
//!
//! Every request and response body crosses the wire as one of these types. They carry
//! `serde` derives for JSON and `utoipa` schemas for the generated OpenAPI document, and
//! contain no behaviour of their own.

pub mod api;
pub mod crew;
pub mod image;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
