use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        memo::{MemoDto, MemoInputDto, MemoListDto, MemoResponseDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::memo::Memo,
        service::memo::MemoService,
        state::AppState,
    },
};

/// Tag for grouping memo endpoints in OpenAPI documentation
pub static MEMO_TAG: &str = "memo";

/// Post a memo.
///
/// # Access Control
/// - `Admin` - Only admins can post memos
///
/// # Returns
/// - `201 Created` - Created memo
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/memos",
    tag = MEMO_TAG,
    security(("bearer" = [])),
    request_body = MemoInputDto,
    responses(
        (status = 201, description = "Memo created", body = MemoResponseDto),
        (status = 400, description = "Title and content are required", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_memo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MemoInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = MemoService::new(&state.db);

    let memo = service.create(payload.title, payload.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(MemoResponseDto {
            message: "Memo uploaded successfully".to_string(),
            memo: memo.into_dto(),
        }),
    ))
}

/// List all memos, newest first.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - All memos
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/memos",
    tag = MEMO_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All memos", body = MemoListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_memos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = MemoService::new(&state.db);

    let memos: Vec<MemoDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Memo::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(MemoListDto {
            message: "Memos retrieved successfully".to_string(),
            memos,
        }),
    ))
}

/// Replace a memo's title and content.
///
/// # Access Control
/// - `Admin` - Only admins can edit memos
///
/// # Arguments
/// - `id` - Memo ID
///
/// # Returns
/// - `200 OK` - Updated memo
/// - `400 Bad Request` - Blank title or content
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown memo
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/memo/{id}",
    tag = MEMO_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Memo ID")
    ),
    request_body = MemoInputDto,
    responses(
        (status = 200, description = "Memo updated", body = MemoResponseDto),
        (status = 400, description = "Title and content are required", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Memo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_memo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MemoInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = MemoService::new(&state.db);

    let memo = service.update(id, payload.title, payload.content).await?;

    Ok((
        StatusCode::OK,
        Json(MemoResponseDto {
            message: "Memo updated successfully".to_string(),
            memo: memo.into_dto(),
        }),
    ))
}

/// Delete a memo.
///
/// # Access Control
/// - `Admin` - Only admins can delete memos
///
/// # Arguments
/// - `id` - Memo ID
///
/// # Returns
/// - `200 OK` - The deleted memo
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown memo
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/memo/{id}",
    tag = MEMO_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Memo ID")
    ),
    responses(
        (status = 200, description = "Memo deleted", body = MemoResponseDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Memo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_memo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = MemoService::new(&state.db);

    let memo = service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MemoResponseDto {
            message: "Memo deleted successfully".to_string(),
            memo: memo.into_dto(),
        }),
    ))
}
