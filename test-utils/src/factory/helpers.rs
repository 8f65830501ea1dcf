//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names, emails and keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an uploader, a second user and a document shared with that second user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((uploader, grantee, document))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shared_document(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::document::Model,
    ),
    DbErr,
> {
    let uploader = crate::factory::user::create_user(db).await?;
    let grantee = crate::factory::user::create_user(db).await?;
    let document = crate::factory::document::create_document(db, uploader.id).await?;
    crate::factory::document::grant_access(db, document.id, grantee.id).await?;

    Ok((uploader, grantee, document))
}
