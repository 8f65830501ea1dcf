//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error type
//! returned by every controller; it wraps domain-specific errors and implements
//! `IntoResponse` so handlers can simply use `?`.
//!
//! Every error body has the shape `{ "message": ..., "error": ... }` where `error` is a
//! stable machine readable code.

pub mod auth;
pub mod config;
pub mod storage;

use axum::{
    extract::{
        multipart::MultipartError,
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, storage::StorageError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` and `StorageError`
/// handle their own status mapping, while the generic variants map to fixed status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Blob store error.
    ///
    /// Delegates to `StorageError::into_response()` (400, 404 or 500).
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Malformed multipart body, or a body exceeding the request size limit.
    ///
    /// Uses the status code axum reports for the rejection.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Failure signing a token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Filesystem error outside the blob store, e.g. binding or preparing directories.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data, e.g. a duplicate name. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Uploaded payload over the allowed size. Results in 413 Payload Too Large.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Client exceeded a rate limit. Results in 429 Too Many Requests.
    #[error("{0}")]
    TooManyRequests(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a unique constraint violation to `Conflict`, passing other errors through.
    ///
    /// # Arguments
    /// - `err` - Database error returned by an insert or update
    /// - `message` - Client-facing message used when the error is a unique violation
    pub fn conflict_on_unique(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }

    /// Maps an extractor rejection onto the matching client error.
    ///
    /// Oversized bodies keep 413 and server-side failures become `InternalError`. Anything
    /// else, a missing content type included, is a 400.
    fn rejected(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::PAYLOAD_TOO_LARGE => Self::PayloadTooLarge(message),
            status if status.is_server_error() => Self::InternalError(message),
            _ => Self::BadRequest(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

/// Builds a JSON error response with the given status, message and code.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>, code: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
            error: code.to_string(),
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 413 Payload Too Large - For `PayloadTooLarge`
/// - 429 Too Many Requests - For `TooManyRequests`
/// - Variable - For `AuthErr`, `StorageErr` and `MultipartErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::StorageErr(err) => err.into_response(),
            Self::MultipartErr(err) => {
                let status = err.status();
                if status.is_server_error() {
                    return InternalServerError(err).into_response();
                }
                let code = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
                    _ => "bad_request",
                };
                error_response(status, err.body_text(), code)
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg, "not_found"),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg, "bad_request"),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg, "conflict"),
            Self::PayloadTooLarge(msg) => {
                error_response(StatusCode::PAYLOAD_TOO_LARGE, msg, "payload_too_large")
            }
            Self::TooManyRequests(msg) => {
                error_response(StatusCode::TOO_MANY_REQUESTS, msg, "too_many_requests")
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "internal",
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "internal",
        )
    }
}
