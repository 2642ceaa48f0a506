//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. Password hashes
//! never leave this module except through `find_credentials_by_email`, which login uses to
//! verify a password.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::User;

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `email` - Normalised (lowercased) email address
    /// - `password_hash` - bcrypt hash of the password
    /// - `is_staff` - Whether the user may perform admin operations
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        is_staff: bool,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            is_staff: ActiveValue::Set(is_staff),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email.
    ///
    /// # Returns
    /// - `Ok(Some((user, password_hash)))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Checks if any staff users exist in the database.
    ///
    /// Used at startup to decide whether the configured admin account should be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one staff user exists
    /// - `Ok(false)` - No staff users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn staff_exists(&self) -> Result<bool, DbErr> {
        let staff_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsStaff.eq(true))
            .count(self.db)
            .await?;

        Ok(staff_count > 0)
    }
}
