//! Folder management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{document::DocumentRepository, folder::FolderRepository},
    error::AppError,
    middleware::auth::require_owner_or_admin,
    model::{
        folder::{Folder, FolderWithCreator},
        user::User,
    },
    service::notification::NotificationService,
};

pub struct FolderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FolderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a folder owned by `creator`.
    ///
    /// # Returns
    /// - `Ok(FolderWithCreator)` - Created folder
    /// - `Err(AppError::BadRequest)` - Blank name
    pub async fn create(&self, creator: &User, name: &str) -> Result<FolderWithCreator, AppError> {
        let name = validate_name(name)?;
        let repo = FolderRepository::new(self.db);

        let folder = repo.create(name, creator.id).await?;

        Ok(FolderWithCreator {
            folder,
            creator: creator.summary(),
        })
    }

    pub async fn get_all(&self) -> Result<Vec<FolderWithCreator>, AppError> {
        let repo = FolderRepository::new(self.db);

        Ok(repo.get_all_with_creator().await?)
    }

    pub async fn get(&self, id: i32) -> Result<FolderWithCreator, AppError> {
        let repo = FolderRepository::new(self.db);

        repo.find_with_creator(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Folder not found".to_string()))
    }

    /// Renames a folder. Only its creator or an admin may do so.
    ///
    /// # Returns
    /// - `Ok(FolderWithCreator)` - Renamed folder
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::NotFound)` - Unknown folder
    /// - `Err(AuthError::AccessDenied)` - User is neither creator nor admin
    pub async fn rename(
        &self,
        user: &User,
        id: i32,
        name: &str,
    ) -> Result<FolderWithCreator, AppError> {
        let name = validate_name(name)?;
        let folder = self.find(id).await?;
        require_owner_or_admin(user, folder.created_by, "rename")?;

        let repo = FolderRepository::new(self.db);
        repo.rename(id, name).await?;

        self.get(id).await
    }

    /// Deletes a folder, keeping its documents at the top level, and notifies its creator.
    ///
    /// # Returns
    /// - `Ok(())` - Folder removed
    /// - `Err(AppError::NotFound)` - Unknown folder
    /// - `Err(AuthError::AccessDenied)` - User is neither creator nor admin
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let folder = self.find(id).await?;
        require_owner_or_admin(user, folder.created_by, "delete")?;

        let detached = DocumentRepository::new(self.db)
            .detach_from_folder(id)
            .await?;
        FolderRepository::new(self.db).delete(id).await?;

        tracing::debug!(
            "Folder {} deleted by user {}, {} documents moved to top level",
            id,
            user.id,
            detached
        );

        NotificationService::new(self.db)
            .notify(
                folder.created_by,
                "Folder Deleted",
                format!("The folder \"{}\" was deleted.", folder.name),
            )
            .await;

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Folder, AppError> {
        FolderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Folder not found".to_string()))
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Folder name is required".to_string()));
    }

    Ok(name.to_string())
}
