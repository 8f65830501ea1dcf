//! Document domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::document::DocumentDto, server::model::user::UserSummary};

/// Stored document metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub name: String,
    pub size: i64,
    pub mime_type: String,
    /// Blob store key of the file contents.
    pub storage_path: String,
    pub uploader_id: i32,
    pub folder_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            size: entity.size,
            mime_type: entity.mime_type,
            storage_path: entity.storage_path,
            uploader_id: entity.uploader_id,
            folder_id: entity.folder_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Document enriched with its uploader, access list and a signed read URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDetails {
    pub document: Document,
    pub uploader: UserSummary,
    pub access: Vec<UserSummary>,
    pub url: String,
}

impl DocumentDetails {
    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.document.id,
            name: self.document.name,
            size: self.document.size,
            mime_type: self.document.mime_type,
            folder_id: self.document.folder_id,
            uploader: self.uploader.into_dto(),
            access: self.access.into_iter().map(UserSummary::into_dto).collect(),
            url: self.url,
            created_at: self.document.created_at,
            updated_at: self.document.updated_at,
        }
    }
}

/// Parameters for inserting document metadata after the blob is stored.
#[derive(Debug, Clone)]
pub struct CreateDocumentParam {
    pub name: String,
    pub size: i64,
    pub mime_type: String,
    pub storage_path: String,
    pub uploader_id: i32,
    pub folder_id: Option<i32>,
}

/// A blob that has been fully written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    pub key: String,
    pub size: u64,
    /// Content type sent with the file part, if any.
    pub content_type: Option<String>,
}

/// Upload form after the file has been streamed to storage.
///
/// Text fields are kept raw so `DocumentService::create` can validate them and remove the
/// stored blob when validation fails.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub blob: StoredBlob,
    pub document_name: Option<String>,
    pub document_type: Option<String>,
    pub folder_id: Option<String>,
}

/// Bytes of a document ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
