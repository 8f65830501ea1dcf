use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            BatchDeleteUsersDto, DeletedCountDto, ProfilePictureForm, UserDto, UserListDto,
        },
    },
    server::{
        controller::upload::read_profile_picture,
        error::AppError,
        extract::{Json, Multipart, Path},
        middleware::auth::{AuthGuard, Permission},
        model::user::{Role, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the caller's profile.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - Profile with a signed picture URL when a picture is set
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    Ok((StatusCode::OK, Json(user_dto(&service, user)?)))
}

/// Upload or replace the caller's profile picture.
///
/// Expects a multipart body with a `picture` part holding a PNG, JPEG, GIF or WebP image
/// of at most 10 MiB. The previous picture is deleted.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Missing, empty or unsupported picture
/// - `401 Unauthorized` - Missing or invalid token
/// - `413 Payload Too Large` - Picture over 10 MiB
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/user/profile/picture",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body(content = ProfilePictureForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Missing, empty or unsupported picture", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 413, description = "Picture too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    headers: HeaderMap,
    Multipart(mut multipart): Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    let blob = read_profile_picture(&state.blobs, &mut multipart, user.id).await?;
    let user = service.set_profile_picture(&user, blob).await?;

    Ok((StatusCode::OK, Json(user_dto(&service, user)?)))
}

/// List all users.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - All users ordered by name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = UserListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    let users = service
        .get_all()
        .await?
        .into_iter()
        .map(|user| user_dto(&service, user))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            users,
        }),
    ))
}

/// Delete a user by email.
///
/// Documents the user uploaded are deleted first, one at a time. A failure on a single
/// document is logged and does not stop the deletion.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Arguments
/// - `email` - Email of the user to delete
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/user/users/{email}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("email" = String, Path, description = "Email of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    service.delete_by_email(&email).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several users by email.
///
/// Unknown emails are skipped. Each matched user is removed the same way as a single
/// delete.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - Number of users deleted
/// - `400 Bad Request` - Empty email list
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - None of the emails matched
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/user/users/batch-delete",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = BatchDeleteUsersDto,
    responses(
        (status = 200, description = "Users deleted", body = DeletedCountDto),
        (status = 400, description = "Empty email list", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No matching users", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn batch_delete_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BatchDeleteUsersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    let deleted = service.delete_many(&payload.emails).await?;

    Ok((StatusCode::OK, Json(DeletedCountDto { deleted })))
}

/// Grant admin privileges to a user.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Arguments
/// - `email` - Email of the user to promote
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/user/users/make-admin/{email}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("email" = String, Path, description = "Email of the user to promote")
    ),
    responses(
        (status = 200, description = "User promoted", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_role(state, headers, email, Role::Admin).await
}

/// Revoke admin privileges from a user.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Arguments
/// - `email` - Email of the user to demote
///
/// # Returns
/// - `200 OK` - Updated user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/user/users/revoke-admin/{email}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("email" = String, Path, description = "Email of the user to demote")
    ),
    responses(
        (status = 200, description = "Admin role revoked", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    set_role(state, headers, email, Role::User).await
}

async fn set_role(
    state: AppState,
    headers: HeaderMap,
    email: String,
    role: Role,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &state.blobs, &state.tokens);

    let user = service.set_role(&email, role).await?;

    Ok((StatusCode::OK, Json(user_dto(&service, user)?)))
}

fn user_dto(service: &UserService<'_>, user: User) -> Result<UserDto, AppError> {
    let picture_url = service.profile_picture_url(&user)?;

    Ok(user.into_dto(picture_url))
}
