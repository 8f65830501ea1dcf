//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::{UserDto, UserSummaryDto};

/// Role of an account. Admins manage users, memos and global counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn from_entity(role: entity::user::Role) -> Self {
        match role {
            entity::user::Role::Admin => Self::Admin,
            entity::user::Role::User => Self::User,
        }
    }

    pub fn into_entity(self) -> entity::user::Role {
        match self {
            Self::Admin => entity::user::Role::Admin,
            Self::User => entity::user::Role::User,
        }
    }
}

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Trimmed and lowercased.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    /// Storage key of the profile picture, if one was uploaded.
    pub profile_picture_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user into a DTO.
    ///
    /// # Arguments
    /// - `profile_picture_url` - Freshly signed URL of the profile picture, if any
    pub fn into_dto(self, profile_picture_url: Option<String>) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
            profile_picture_url,
            created_at: self.created_at,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: Role::from_entity(entity.role),
            profile_picture_path: entity.profile_picture_path,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Public identity of a user embedded in other resources.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// Parameters for inserting a new user. Values are already validated and normalized.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Raw registration input, validated by `AuthService::register`.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Raw login input.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}
