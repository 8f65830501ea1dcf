use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        document::{
            DocumentAccessDto, DocumentDto, DocumentListDto, DocumentQuery, MoveDocumentDto,
            UploadDocumentForm,
        },
    },
    server::{
        controller::upload::read_document_upload,
        error::AppError,
        extract::{Json, Multipart, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::document::DocumentDetails,
        service::document::DocumentService,
        state::AppState,
        util::storage_key::sanitize_file_name,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Upload a document.
///
/// The file part is streamed to storage before the metadata is written. If the metadata
/// cannot be written the stored file is removed again.
///
/// # Access Control
/// - `User` - Any authenticated user; the caller becomes the uploader
///
/// # Returns
/// - `201 Created` - Created document with a signed read URL
/// - `400 Bad Request` - Missing file or name, empty file, or malformed folder ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Folder does not exist
/// - `409 Conflict` - A document with the same name exists
/// - `413 Payload Too Large` - File over 10 MiB
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    request_body(content = UploadDocumentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document uploaded", body = DocumentDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Folder not found", body = ErrorDto),
        (status = 409, description = "Duplicate document name", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Multipart(mut multipart): Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let upload = read_document_upload(&state.blobs, &mut multipart).await?;
    let document = service.create(&user, upload).await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// List documents visible to the caller.
///
/// Returns documents the caller uploaded or was granted access to, newest first. Every
/// entry carries a freshly signed read URL valid for 15 minutes.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Arguments
/// - `folderId` - Optional query parameter restricting the list to one folder
///
/// # Returns
/// - `200 OK` - Visible documents
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(DocumentQuery),
    responses(
        (status = 200, description = "Visible documents", body = DocumentListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DocumentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let documents: Vec<DocumentDto> = service
        .get_visible(&user, query.folder_id)
        .await?
        .into_iter()
        .map(DocumentDetails::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(DocumentListDto { documents })))
}

/// Download a document as an attachment.
///
/// # Access Control
/// - `User` - The uploader, users on the access list, or an admin
///
/// # Arguments
/// - `id` - Document ID
///
/// # Returns
/// - `200 OK` - File bytes with the stored content type
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller may not read the document
/// - `404 Not Found` - Unknown document or missing file
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    get,
    path = "/api/documents/{id}/download",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let content = service.download(&user, id).await?;

    let content_type = HeaderValue::from_str(&content.mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        sanitize_file_name(&content.name)
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content.bytes,
    ))
}

/// Move a document into a folder, or out of every folder.
///
/// # Access Control
/// - `User` - The uploader or an admin
///
/// # Arguments
/// - `id` - Document ID
/// - `payload` - Target folder ID, or null
///
/// # Returns
/// - `200 OK` - Updated document
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither uploader nor admin
/// - `404 Not Found` - Unknown document or folder
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/documents/{id}/folder",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = MoveDocumentDto,
    responses(
        (status = 200, description = "Document moved", body = DocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Document or folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MoveDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let document = service.move_to_folder(&user, id, payload.folder_id).await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Delete a document and its stored file.
///
/// # Access Control
/// - `User` - The uploader or an admin
///
/// # Arguments
/// - `id` - Document ID
///
/// # Returns
/// - `204 No Content` - Document deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither uploader nor admin
/// - `404 Not Found` - Unknown document
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Grant another user read access to a document.
///
/// The target user receives a "Document Shared" notification.
///
/// # Access Control
/// - `User` - The uploader or an admin
///
/// # Arguments
/// - `id` - Document ID
/// - `payload` - Email of the user to share with
///
/// # Returns
/// - `200 OK` - Document with its updated access list
/// - `400 Bad Request` - Target already has access
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither uploader nor admin
/// - `404 Not Found` - Unknown document or email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/documents/{id}/share",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = DocumentAccessDto,
    responses(
        (status = 200, description = "Document shared", body = DocumentDto),
        (status = 400, description = "User already has access", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Document or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn share_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<DocumentAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let document = service.share(&user, id, &payload.email).await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Remove a user's read access to a document.
///
/// The target user receives an "Access Revoked" notification.
///
/// # Access Control
/// - `User` - The uploader or an admin
///
/// # Arguments
/// - `id` - Document ID
/// - `payload` - Email of the user to remove
///
/// # Returns
/// - `200 OK` - Document with its updated access list
/// - `400 Bad Request` - Target does not have access
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither uploader nor admin
/// - `404 Not Found` - Unknown document or email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/documents/{id}/remove-access",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = DocumentAccessDto,
    responses(
        (status = 200, description = "Access removed", body = DocumentDto),
        (status = 400, description = "User does not have access", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Document or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_document_access(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<DocumentAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let document = service.revoke(&user, id, &payload.email).await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Count all documents.
///
/// # Access Control
/// - `Admin` - Only admins can view statistics
///
/// # Returns
/// - `200 OK` - Total number of documents
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/countDocuments",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Document count", body = CountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let count = service.count().await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Count documents shared with at least one user.
///
/// # Access Control
/// - `Admin` - Only admins can view statistics
///
/// # Returns
/// - `200 OK` - Number of shared documents
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/countSharedDocuments",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Shared document count", body = CountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_shared_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = DocumentService::new(&state.db, &state.blobs, &state.tokens);

    let count = service.count_shared().await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}
