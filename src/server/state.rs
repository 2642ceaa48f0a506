//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds the database pool, the offset used to resolve
//! calendar-date filters, and the media store for uploaded images.

use chrono::FixedOffset;
use sea_orm::DatabaseConnection;

use crate::server::util::media::MediaStore;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle, `FixedOffset` is
/// `Copy`, and `MediaStore` only holds its root path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Local offset that defines calendar days for `created_at`, `departure_time` and
    /// `arrival_time` filters.
    pub utc_offset: FixedOffset,

    /// Storage for train and crew images.
    pub media: MediaStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `utc_offset` - Offset used by date filters
    /// - `media` - Image storage rooted at the configured media directory
    pub fn new(db: DatabaseConnection, utc_offset: FixedOffset, media: MediaStore) -> Self {
        Self {
            db,
            utc_offset,
            media,
        }
    }
}
