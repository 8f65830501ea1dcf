use super::{blob_store, tokens};
use crate::server::{
    data::{blob::BlobStore, document::DocumentRepository},
    error::{auth::AuthError, AppError},
    model::{
        document::{DocumentUpload, StoredBlob},
        user::User,
    },
    service::{document::DocumentService, notification::NotificationService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod download;
mod share;

/// Stores `bytes` and wraps them in an upload with the given form fields.
async fn upload(
    blobs: &BlobStore,
    key: &str,
    bytes: &[u8],
    name: Option<&str>,
    folder_id: Option<&str>,
) -> DocumentUpload {
    let size = blobs.put(key, bytes).await.unwrap();

    DocumentUpload {
        blob: StoredBlob {
            key: key.to_string(),
            size,
            content_type: Some("text/plain".to_string()),
        },
        document_name: name.map(str::to_string),
        document_type: None,
        folder_id: folder_id.map(str::to_string),
    }
}
