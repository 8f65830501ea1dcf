use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the bearer token and checks the required permissions.
    ///
    /// Permissions are checked against the token's role claim first and then against the
    /// stored role, so a revoked admin loses access before their token expires.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::MissingToken | InvalidToken)` - No usable token (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user (401)
    /// - `Err(AuthError::AccessDenied)` - Missing permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = bearer_token(self.headers)?;
        let claims = self.tokens.verify_access(token)?;
        let user_id = claims.user_id()?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Token without admin role used for an admin operation".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Admin role was revoked after the token was issued".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Allows the action when `user` owns the resource or is an admin.
pub fn require_owner_or_admin(user: &User, owner_id: i32, action: &str) -> Result<(), AuthError> {
    if user.id == owner_id || user.is_admin() {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("User attempted to {} a resource owned by user {}", action, owner_id),
    ))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let Some((scheme, token)) = value.trim().split_once(' ') else {
        return Err(AuthError::MissingToken);
    };

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
