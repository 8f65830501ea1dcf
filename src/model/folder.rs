use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderDto {
    pub id: i32,
    pub name: String,
    pub created_by: UserSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderDto {
    #[serde(default)]
    pub folder_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenameFolderDto {
    #[serde(default)]
    pub new_folder_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FolderListDto {
    pub folders: Vec<FolderDto>,
}

/// A single folder, with a status message after create and rename.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FolderResponseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub folder: FolderDto,
}
