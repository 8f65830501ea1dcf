use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Registration request. Missing fields deserialize as empty and are rejected with 400.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct RegisterDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Access token plus the authenticated user's profile.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}
