use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::user::{AuthSession, LoginParams, RegisterParams},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// The first account ever registered becomes an admin; every later account is a regular
/// user.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Name, email and password
///
/// # Returns
/// - `201 Created` - Access token and the created user
/// - `400 Bad Request` - Missing or invalid fields
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service
        .register(RegisterParams {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session_dto(&state, session)?)))
}

/// Log in with email and password.
///
/// Records an attendance entry for the login. Rate limited per client IP.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Access token and the authenticated user
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `429 Too Many Requests` - Too many login attempts from this address
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many login attempts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service
        .login(LoginParams {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::OK, Json(session_dto(&state, session)?)))
}

fn session_dto(state: &AppState, session: AuthSession) -> Result<AuthResponseDto, AppError> {
    let picture_url =
        UserService::new(&state.db, &state.blobs, &state.tokens).profile_picture_url(&session.user)?;

    Ok(AuthResponseDto {
        token: session.token,
        user: session.user.into_dto(picture_url),
    })
}
