//! Multipart upload handling.
//!
//! File parts are streamed chunk by chunk into the blob store instead of being buffered,
//! and rejected as soon as they cross the size limit.

use axum::extract::multipart::{Field, Multipart};

use crate::server::{
    data::blob::BlobStore,
    error::AppError,
    model::document::{DocumentUpload, StoredBlob},
    util::storage_key::{document_key, image_extension, profile_picture_key},
};

/// Largest accepted file, in bytes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const DOCUMENT_FIELD: &str = "document";
const PICTURE_FIELD: &str = "picture";

#[derive(Default)]
struct UploadForm {
    blob: Option<StoredBlob>,
    document_name: Option<String>,
    document_type: Option<String>,
    folder_id: Option<String>,
}

/// Reads the document upload form, streaming the `document` part into storage.
///
/// The stored blob is removed again if a later part fails to parse.
///
/// # Returns
/// - `Ok(DocumentUpload)` - Stored blob and raw text fields
/// - `Err(AppError::BadRequest)` - No `document` part, or more than one
/// - `Err(AppError::PayloadTooLarge)` - File over `MAX_UPLOAD_BYTES`
/// - `Err(AppError::MultipartErr)` - Malformed body
pub async fn read_document_upload(
    blobs: &BlobStore,
    multipart: &mut Multipart,
) -> Result<DocumentUpload, AppError> {
    let mut form = UploadForm::default();

    if let Err(err) = read_document_fields(blobs, multipart, &mut form).await {
        if let Some(blob) = &form.blob {
            discard(blobs, &blob.key).await;
        }
        return Err(err);
    }

    let Some(blob) = form.blob else {
        return Err(AppError::BadRequest("No document uploaded".to_string()));
    };

    Ok(DocumentUpload {
        blob,
        document_name: form.document_name,
        document_type: form.document_type,
        folder_id: form.folder_id,
    })
}

async fn read_document_fields(
    blobs: &BlobStore,
    multipart: &mut Multipart,
    form: &mut UploadForm,
) -> Result<(), AppError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(DOCUMENT_FIELD) => {
                if form.blob.is_some() {
                    return Err(AppError::BadRequest(
                        "Only one document may be uploaded at a time".to_string(),
                    ));
                }
                let key = document_key(field.file_name().unwrap_or_default());
                form.blob = Some(store_field(blobs, key, field).await?);
            }
            Some("documentName") => form.document_name = Some(field.text().await?),
            Some("documentType") => form.document_type = Some(field.text().await?),
            Some("folderId") => form.folder_id = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(())
}

/// Reads the profile picture form and streams the `picture` part into storage.
///
/// # Returns
/// - `Ok(StoredBlob)` - Stored picture
/// - `Err(AppError::BadRequest)` - No `picture` part, or not a supported image type
/// - `Err(AppError::PayloadTooLarge)` - File over `MAX_UPLOAD_BYTES`
pub async fn read_profile_picture(
    blobs: &BlobStore,
    multipart: &mut Multipart,
    user_id: i32,
) -> Result<StoredBlob, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PICTURE_FIELD) {
            continue;
        }

        let Some(extension) = field.content_type().and_then(image_extension) else {
            return Err(AppError::BadRequest(
                "Profile picture must be a PNG, JPEG, GIF or WebP image".to_string(),
            ));
        };

        return store_field(blobs, profile_picture_key(user_id, extension), field).await;
    }

    Err(AppError::BadRequest("No picture uploaded".to_string()))
}

/// Streams one file part into a new blob under `key`, enforcing `MAX_UPLOAD_BYTES`.
async fn store_field(
    blobs: &BlobStore,
    key: String,
    mut field: Field<'_>,
) -> Result<StoredBlob, AppError> {
    let content_type = field.content_type().map(str::to_string);
    let mut writer = blobs.writer(&key).await?;

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(err) => {
                writer.abort().await;
                return Err(err.into());
            }
        };

        if writer.written() + chunk.len() as u64 > MAX_UPLOAD_BYTES {
            writer.abort().await;
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the {} MiB limit",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        if let Err(err) = writer.write(&chunk).await {
            writer.abort().await;
            return Err(err.into());
        }
    }

    let size = writer.finish().await?;

    Ok(StoredBlob {
        key,
        size,
        content_type,
    })
}

async fn discard(blobs: &BlobStore, key: &str) {
    if let Err(err) = blobs.delete(key).await {
        tracing::warn!("Failed to remove blob {} of an aborted upload: {}", key, err);
    }
}
