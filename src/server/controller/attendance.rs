use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, attendance::AttendanceDto},
    server::{
        error::AppError, extract::Json, middleware::auth::AuthGuard,
        model::attendance::Attendance, service::attendance::AttendanceService, state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Close the caller's most recent open session.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - The closed attendance record
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No open attendance record
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/logLogout",
    tag = ATTENDANCE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Session closed", body = AttendanceDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No open attendance record", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AttendanceService::new(&state.db);

    let record = service.logout(user.id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// List the caller's attendance records, newest login first.
///
/// # Access Control
/// - `User` - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's records
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AttendanceService::new(&state.db);

    let records: Vec<AttendanceDto> = service
        .get_for_user(user.id)
        .await?
        .into_iter()
        .map(Attendance::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(records)))
}
