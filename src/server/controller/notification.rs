use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{NotificationDto, NotificationListDto, UpdatedCountDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::AuthGuard,
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications, newest first.
///
/// # Access Control
/// - `User` - Any authenticated user; only their own notifications are returned
///
/// # Returns
/// - `200 OK` - The caller's notifications
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's notifications", body = NotificationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db);

    let notifications: Vec<NotificationDto> = service
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(Notification::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(NotificationListDto { notifications })))
}

/// Mark one of the caller's notifications as read.
///
/// # Access Control
/// - `User` - Only the notification's recipient
///
/// # Arguments
/// - `id` - Notification ID
///
/// # Returns
/// - `200 OK` - Updated notification
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown notification or one belonging to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db);

    let notification = service.mark_read(user.id, id).await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Mark all of the caller's notifications as read.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - Number of notifications updated
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Notifications marked read", body = UpdatedCountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = NotificationService::new(&state.db);

    let updated = service.mark_all_read(user.id).await?;

    Ok((StatusCode::OK, Json(UpdatedCountDto { updated })))
}
