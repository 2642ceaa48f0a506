//! User service for registration, login and the bootstrap admin account.
//!
//! Passwords are hashed with bcrypt and never leave this module in plain text.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Credentials, User},
    util::validation::unique_violation,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService hashing with bcrypt's default cost.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Overrides the bcrypt cost, e.g. to keep tests fast.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Registers a regular (non-staff) account.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::ValidationErr(InvalidField))` - Malformed email or short password
    /// - `Err(AppError::ValidationErr(DuplicateEntity))` - Email already registered
    pub async fn register(&self, credentials: Credentials) -> Result<User, AppError> {
        credentials.validate()?;
        self.create(credentials, false).await
    }

    /// Checks an email and password pair.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, credentials: Credentials) -> Result<User, AppError> {
        let found = UserRepository::new(self.db)
            .find_credentials_by_email(&credentials.email)
            .await?;

        match found {
            Some((user, hash)) if bcrypt::verify(&credentials.password, &hash)? => {
                tracing::debug!("User {} logged in", user.id);
                Ok(user)
            }
            _ => {
                tracing::warn!("Failed login attempt for {}", credentials.email);
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates the configured staff account unless a staff user already exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The staff account was created
    /// - `Ok(None)` - A staff user already existed; nothing was written
    pub async fn bootstrap_admin(&self, credentials: Credentials) -> Result<Option<User>, AppError> {
        if self.staff_exists().await? {
            return Ok(None);
        }

        credentials.validate()?;
        let user = self.create(credentials, true).await?;

        tracing::info!("Created staff account {}", user.email);

        Ok(Some(user))
    }

    pub async fn staff_exists(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).staff_exists().await?)
    }

    async fn create(&self, credentials: Credentials, is_staff: bool) -> Result<User, AppError> {
        let hash = bcrypt::hash(&credentials.password, self.cost)?;

        UserRepository::new(self.db)
            .create(credentials.email, hash, is_staff)
            .await
            .map_err(|e| unique_violation(e, &["email"]))
    }
}
