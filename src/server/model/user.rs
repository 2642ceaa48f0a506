//! User domain model and account parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CredentialsDto, UserDto},
    server::error::validation::ValidationError,
};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_staff: entity.is_staff,
            created_at: entity.created_at,
        }
    }

    /// Owner filter for orders and tickets: staff see everyone's, other users only their own.
    pub fn owner_scope(&self) -> Option<i32> {
        (!self.is_staff).then_some(self.id)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_staff: self.is_staff,
            created_at: self.created_at,
        }
    }
}

/// Email and plain-text password as submitted for registration or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Emails are compared case-insensitively, so they are stored lowercased.
    pub fn new(email: &str, password: impl Into<String>) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password: password.into(),
        }
    }

    pub fn from_dto(dto: CredentialsDto) -> Self {
        Self::new(&dto.email, dto.password)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let valid_email = match self.email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid_email {
            return Err(ValidationError::InvalidField {
                field: "email",
                reason: "must be a valid email address".to_string(),
            });
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::InvalidField {
                field: "password",
                reason: format!("must be at least {} characters long", MIN_PASSWORD_LENGTH),
            });
        }

        Ok(())
    }
}
