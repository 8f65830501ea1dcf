use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, audience or expiry validation, or its claims are malformed.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token is valid but the user it names no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permission the operation requires.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Server-side description of what was attempted
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; clients receive generic messages.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or expired tokens, bad credentials, deleted users
/// - 403 Forbidden - Insufficient permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication required",
                "unauthorized",
            ),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token",
                "unauthorized",
            ),
            Self::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid email or password",
                "unauthorized",
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
                "forbidden",
            ),
        }
    }
}
