//! Document factory for creating test document and access list entities.
//!
//! Only database rows are created. Tests that read blobs must write them to the blob store
//! themselves under the document's `storage_path`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::document::DocumentFactory;
///
/// let document = DocumentFactory::new(&db, user.id)
///     .name("report.pdf")
///     .folder_id(Some(folder.id))
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    size: i64,
    mime_type: String,
    storage_path: String,
    uploader_id: i32,
    folder_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Document {id}"`
    /// - size: `16`
    /// - mime_type: `"text/plain"`
    /// - storage_path: `"documents/test-{id}.txt"`
    /// - folder_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `uploader_id` - ID of the uploading user
    pub fn new(db: &'a DatabaseConnection, uploader_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Document {}", id),
            size: 16,
            mime_type: "text/plain".to_string(),
            storage_path: format!("documents/test-{}.txt", id),
            uploader_id,
            folder_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn storage_path(mut self, storage_path: impl Into<String>) -> Self {
        self.storage_path = storage_path.into();
        self
    }

    pub fn folder_id(mut self, folder_id: Option<i32>) -> Self {
        self.folder_id = folder_id;
        self
    }

    /// Overrides the creation time, used to control newest-first ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            name: ActiveValue::Set(self.name),
            size: ActiveValue::Set(self.size),
            mime_type: ActiveValue::Set(self.mime_type),
            storage_path: ActiveValue::Set(self.storage_path),
            uploader_id: ActiveValue::Set(self.uploader_id),
            folder_id: ActiveValue::Set(self.folder_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document with default values uploaded by `uploader_id`.
pub async fn create_document(
    db: &DatabaseConnection,
    uploader_id: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, uploader_id).build().await
}

/// Adds `user_id` to the access list of `document_id`.
pub async fn grant_access(
    db: &DatabaseConnection,
    document_id: i32,
    user_id: i32,
) -> Result<entity::document_access::Model, DbErr> {
    entity::document_access::ActiveModel {
        document_id: ActiveValue::Set(document_id),
        user_id: ActiveValue::Set(user_id),
        granted_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
