//! Argon2 password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::server::error::AppError;

/// Hashes `password` into a PHC string with a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC encoded hash
/// - `Err(AppError::InternalError)` - Hashing failed or the blocking task panicked
pub async fn hash(password: String) -> Result<String, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?;

    result.map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks `password` against a stored PHC hash.
///
/// A stored hash that cannot be parsed never matches.
pub async fn verify(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&hash) else {
            tracing::warn!("Stored password hash could not be parsed");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}
