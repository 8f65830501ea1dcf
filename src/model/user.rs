use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// `admin` or `user`.
    pub role: String,
    /// Signed, time-limited URL of the profile picture.
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Minimal user reference embedded in documents and folders.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserListDto {
    pub success: bool,
    pub users: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct BatchDeleteUsersDto {
    #[serde(default)]
    pub emails: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DeletedCountDto {
    pub deleted: u64,
}

/// Multipart form accepted by the profile picture endpoint. Documentation only.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct ProfilePictureForm {
    /// PNG, JPEG, GIF or WebP image, at most 10 MiB.
    #[schema(value_type = String, format = Binary)]
    pub picture: Vec<u8>,
}
