//! Storage key construction.
//!
//! Every key produced here passes `BlobStore` key validation.

use uuid::Uuid;

const MAX_NAME_LEN: usize = 100;

/// Builds a unique key for an uploaded document: `documents/<uuid>-<sanitized name>`.
pub fn document_key(original_name: &str) -> String {
    format!(
        "documents/{}-{}",
        Uuid::new_v4(),
        sanitize_file_name(original_name)
    )
}

/// Builds a unique key for a profile picture: `profile-pictures/<user id>/<uuid>.<ext>`.
pub fn profile_picture_key(user_id: i32, extension: &str) -> String {
    format!("profile-pictures/{}/{}.{}", user_id, Uuid::new_v4(), extension)
}

/// Reduces a client supplied file name to `[A-Za-z0-9._-]`.
///
/// Path components are dropped, other characters become `_`, and leading dots are removed.
/// Falls back to `file` when nothing usable remains.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();
    let sanitized = sanitized.trim_start_matches('.');

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized.to_string()
    }
}

/// File extension for an accepted profile picture content type.
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Content type of a stored profile picture, derived from its key's extension.
pub fn image_content_type(key: &str) -> &'static str {
    match key.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
