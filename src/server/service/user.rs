//! User management.
//!
//! Deleting a user first removes the documents they uploaded one at a time, blob before
//! record. A failure on one document is logged and the rest continue, so a single broken
//! blob never blocks removing an account.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blob::BlobStore, document::DocumentRepository, user::UserRepository},
    error::{storage::StorageError, AppError},
    model::{
        document::StoredBlob,
        user::{Role, User},
    },
    service::{document::DocumentService, token::TokenService},
    util::storage_key::image_content_type,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
    tokens: &'a TokenService,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a BlobStore, tokens: &'a TokenService) -> Self {
        Self { db, blobs, tokens }
    }

    /// Signs a fresh URL for the user's profile picture, if one is set.
    pub fn profile_picture_url(&self, user: &User) -> Result<Option<String>, AppError> {
        user.profile_picture_path
            .as_deref()
            .map(|key| self.tokens.signed_url(key, image_content_type(key)))
            .transpose()
    }

    /// Replaces the user's profile picture with an already stored blob.
    ///
    /// The previous picture is deleted best effort. The new blob is deleted if it is empty or
    /// the database update fails.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new picture key
    /// - `Err(AppError::BadRequest)` - Empty picture
    pub async fn set_profile_picture(&self, user: &User, blob: StoredBlob) -> Result<User, AppError> {
        if blob.size == 0 {
            self.remove_blob(&blob.key).await;
            return Err(AppError::BadRequest("Uploaded picture is empty".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let updated = match repo.set_profile_picture(user.id, Some(blob.key.clone())).await {
            Ok(Some(updated)) => updated,
            Ok(None) => {
                self.remove_blob(&blob.key).await;
                return Err(AppError::NotFound("User not found".to_string()));
            }
            Err(err) => {
                self.remove_blob(&blob.key).await;
                return Err(err.into());
            }
        };

        if let Some(previous) = &user.profile_picture_path {
            self.remove_blob(previous).await;
        }

        Ok(updated)
    }

    /// Gets all users ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes the user with `email` along with everything they uploaded.
    ///
    /// # Returns
    /// - `Ok(())` - User removed
    /// - `Err(AppError::NotFound)` - No user with that email
    pub async fn delete_by_email(&self, email: &str) -> Result<(), AppError> {
        let user = self.find_by_email(email).await?;

        self.purge(user).await
    }

    /// Deletes every user whose email is listed. Unknown emails are skipped.
    ///
    /// A user that fails to delete is logged and the batch moves on to the next email.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users deleted
    /// - `Err(AppError::BadRequest)` - Empty list
    /// - `Err(AppError::NotFound)` - None of the emails matched a user
    /// - `Err(AppError)` - Every matched user failed to delete; the last failure is returned
    pub async fn delete_many(&self, emails: &[String]) -> Result<u64, AppError> {
        if emails.is_empty() {
            return Err(AppError::BadRequest("At least one email is required".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let mut deleted = 0;
        let mut last_failure = None;

        for email in emails {
            let Some(user) = repo.find_by_email(&normalize_email(email)).await? else {
                tracing::debug!("Skipping unknown email {} in batch delete", email);
                continue;
            };

            match self.purge(user).await {
                Ok(()) => deleted += 1,
                Err(err) => {
                    tracing::error!("Failed to delete user {} in batch delete: {}", email, err);
                    last_failure = Some(err);
                }
            }
        }

        if deleted == 0 {
            return Err(last_failure
                .unwrap_or_else(|| AppError::NotFound("No matching users found".to_string())));
        }

        Ok(deleted)
    }

    /// Sets the role of the user with `email`.
    pub async fn set_role(&self, email: &str, role: Role) -> Result<User, AppError> {
        let user = self.find_by_email(email).await?;
        let repo = UserRepository::new(self.db);

        repo.set_role(user.id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn purge(&self, user: User) -> Result<(), AppError> {
        let documents = DocumentRepository::new(self.db)
            .get_by_uploader(user.id)
            .await?;
        let document_service = DocumentService::new(self.db, self.blobs, self.tokens);

        for document in &documents {
            if let Err(err) = document_service.remove(document).await {
                tracing::error!(
                    "Failed to remove document {} of user {}: {}",
                    document.id,
                    user.id,
                    err
                );
            }
        }

        if let Some(picture) = &user.profile_picture_path {
            self.remove_blob(picture).await;
        }

        UserRepository::new(self.db).delete(user.id).await?;

        tracing::info!(
            "Deleted user {} ({}) and {} uploaded documents",
            user.id,
            user.email,
            documents.len()
        );

        Ok(())
    }

    async fn remove_blob(&self, key: &str) {
        match self.blobs.delete(key).await {
            Ok(()) | Err(StorageError::NotFound(_)) => {}
            Err(err) => tracing::warn!("Failed to remove blob {}: {}", key, err),
        }
    }
}

/// Trims and lowercases an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
