//! Authentication and permission checks for request handlers.
//!
//! Every endpoint other than registration, login and the API docs requires a logged-in
//! user. Write operations on the catalog and deletion of orders and tickets additionally
//! require a staff account.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The user must be staff.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::NotAuthenticated)` - No user in the session, or the user was deleted
    /// - `Err(AuthError::PermissionDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            tracing::debug!("Session refers to missing user {}", user_id);
            return Err(AuthError::NotAuthenticated.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_staff {
                        return Err(AuthError::PermissionDenied(
                            user.id,
                            "staff account required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
