use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session, or the id no longer matches a user row.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    NotAuthenticated,

    /// The authenticated user lacks a required permission.
    ///
    /// Carries the user id and a server-side description for the log. Results in a
    /// 403 Forbidden response with a generic message.
    #[error("User {0} denied access: {1}")]
    PermissionDenied(i32, String),

    /// Email and password do not match a user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` / `InvalidCredentials` → 401 Unauthorized
/// - `PermissionDenied` → 403 Forbidden, details logged at debug level only
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::PermissionDenied(..) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action",
                    )),
                )
                    .into_response()
            }
        }
    }
}
