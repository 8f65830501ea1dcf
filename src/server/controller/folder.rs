use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        folder::{
            CreateFolderDto, FolderDto, FolderListDto, FolderResponseDto, RenameFolderDto,
        },
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::AuthGuard,
        model::folder::FolderWithCreator,
        service::folder::FolderService,
        state::AppState,
    },
};

/// Tag for grouping folder endpoints in OpenAPI documentation
pub static FOLDER_TAG: &str = "folder";

/// Create a folder owned by the caller.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `201 Created` - Created folder
/// - `400 Bad Request` - Blank folder name
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/folders",
    tag = FOLDER_TAG,
    security(("bearer" = [])),
    request_body = CreateFolderDto,
    responses(
        (status = 201, description = "Folder created", body = FolderResponseDto),
        (status = 400, description = "Folder name is required", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_folder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFolderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = FolderService::new(&state.db);

    let folder = service.create(&user, &payload.folder_name).await?;

    Ok((
        StatusCode::CREATED,
        Json(FolderResponseDto {
            message: Some("Folder created successfully".to_string()),
            folder: folder.into_dto(),
        }),
    ))
}

/// List every folder with its creator.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - All folders ordered by name
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/folders",
    tag = FOLDER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All folders", body = FolderListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_folders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = FolderService::new(&state.db);

    let folders: Vec<FolderDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(FolderWithCreator::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(FolderListDto { folders })))
}

/// Get a single folder.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Arguments
/// - `folder_id` - Folder ID
///
/// # Returns
/// - `200 OK` - Folder with its creator
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown folder
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/folder/{folder_id}",
    tag = FOLDER_TAG,
    security(("bearer" = [])),
    params(
        ("folder_id" = i32, Path, description = "Folder ID")
    ),
    responses(
        (status = 200, description = "Folder details", body = FolderResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_folder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(folder_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = FolderService::new(&state.db);

    let folder = service.get(folder_id).await?;

    Ok((
        StatusCode::OK,
        Json(FolderResponseDto {
            message: None,
            folder: folder.into_dto(),
        }),
    ))
}

/// Rename a folder.
///
/// # Access Control
/// - `User` - The folder's creator or an admin
///
/// # Arguments
/// - `folder_id` - Folder ID
/// - `payload` - New folder name
///
/// # Returns
/// - `200 OK` - Renamed folder
/// - `400 Bad Request` - Blank folder name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither creator nor admin
/// - `404 Not Found` - Unknown folder
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/folder/{folder_id}",
    tag = FOLDER_TAG,
    security(("bearer" = [])),
    params(
        ("folder_id" = i32, Path, description = "Folder ID")
    ),
    request_body = RenameFolderDto,
    responses(
        (status = 200, description = "Folder renamed", body = FolderResponseDto),
        (status = 400, description = "Folder name is required", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_folder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(folder_id): Path<i32>,
    Json(payload): Json<RenameFolderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = FolderService::new(&state.db);

    let folder = service
        .rename(&user, folder_id, &payload.new_folder_name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FolderResponseDto {
            message: Some("Folder renamed successfully".to_string()),
            folder: folder.into_dto(),
        }),
    ))
}

/// Delete a folder.
///
/// Documents inside the folder are kept and moved to the top level. The folder's creator
/// receives a "Folder Deleted" notification.
///
/// # Access Control
/// - `User` - The folder's creator or an admin
///
/// # Arguments
/// - `folder_id` - Folder ID
///
/// # Returns
/// - `204 No Content` - Folder deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither creator nor admin
/// - `404 Not Found` - Unknown folder
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/folder/{folder_id}",
    tag = FOLDER_TAG,
    security(("bearer" = [])),
    params(
        ("folder_id" = i32, Path, description = "Folder ID")
    ),
    responses(
        (status = 204, description = "Folder deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Folder not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_folder(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(folder_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = FolderService::new(&state.db);

    service.delete(&user, folder_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
