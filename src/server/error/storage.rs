use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains empty, `.`/`..` or non `[A-Za-z0-9._-]` segments.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// No blob is stored under the key.
    #[error("Blob not found: {0}")]
    NotFound(String),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidKey(_) => {
                error_response(StatusCode::BAD_REQUEST, "Invalid storage key", "bad_request")
            }
            Self::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "File not found", "not_found")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
