//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, and
//! `helpers` builds whole dependency chains when a test only cares about the leaf.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let kyiv = factory::station::create_station(&db).await?;
//!
//!     // Create with all dependencies
//!     let journey = factory::helpers::create_journey_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let train = factory::train::TrainFactory::new(&db, train_type.id)
//!     .name("Intercity+")
//!     .cargo_num(2)
//!     .places_in_cargo(2)
//!     .build()
//!     .await?;
//! ```

pub mod crew;
pub mod helpers;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;

pub use crew::create_crew;
pub use journey::create_journey;
pub use order::create_order;
pub use route::create_route;
pub use station::create_station;
pub use ticket::create_ticket;
pub use train::create_train;
pub use train_type::create_train_type;
pub use user::create_user;
