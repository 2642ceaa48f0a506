//! Pure helpers shared by services and controllers.
//!
//! - `validation` - domain rules checked before every write
//! - `capacity` - seat capacity and availability arithmetic
//! - `parse` - parsing of free-text query values
//! - `media` - image format detection and on-disk storage

pub mod capacity;
pub mod media;
pub mod parse;
pub mod validation;
