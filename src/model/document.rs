use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i32,
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    pub mime_type: String,
    pub folder_id: Option<i32>,
    pub uploader: UserSummaryDto,
    /// Users granted read access besides the uploader.
    pub access: Vec<UserSummaryDto>,
    /// Signed read URL, valid for 15 minutes from the time of the response.
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DocumentListDto {
    pub documents: Vec<DocumentDto>,
}

/// Multipart form accepted by the upload endpoint. Documentation only.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadDocumentForm {
    /// File contents, at most 10 MiB.
    #[schema(value_type = String, format = Binary)]
    pub document: Vec<u8>,
    pub document_name: String,
    /// Overrides the content type sent with the file part.
    pub document_type: Option<String>,
    pub folder_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveDocumentDto {
    /// Target folder, or null to remove the document from its folder.
    #[serde(default)]
    pub folder_id: Option<i32>,
}

/// Share or revoke request naming the target user.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct DocumentAccessDto {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DocumentQuery {
    /// Only list documents in this folder.
    pub folder_id: Option<i32>,
}
