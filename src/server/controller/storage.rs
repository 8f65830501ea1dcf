use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    extract::{Path, Query},
    state::AppState,
};

#[derive(Deserialize)]
pub struct SignedUrlQuery {
    token: Option<String>,
}

/// Serve a stored blob to the holder of a signed URL.
///
/// Not listed in the OpenAPI document; clients only ever follow URLs returned by other
/// endpoints.
///
/// # Access Control
/// - Public, gated by the `token` query parameter, which must be signed for this exact key
///
/// # Returns
/// - `200 OK` - Blob bytes with the content type recorded in the token
/// - `400 Bad Request` - Malformed key
/// - `401 Unauthorized` - Missing, invalid or expired token, or a token for another key
/// - `404 Not Found` - Blob no longer exists
pub async fn get_blob(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SignedUrlQuery>,
) -> Result<impl IntoResponse, AppError> {
    let token = query.token.ok_or(AuthError::MissingToken)?;
    let claims = state.tokens.verify_blob(&token, &key)?;

    let bytes = state.blobs.read(&key).await?;

    let content_type = HeaderValue::from_str(&claims.ct)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes))
}
