//! Folder factory for creating test folder entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test folders owned by `created_by`.
pub struct FolderFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    created_by: i32,
}

impl<'a> FolderFactory<'a> {
    /// Creates a new FolderFactory named `"Folder {id}"`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - ID of the user that owns the folder
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            name: format!("Folder {}", next_id()),
            created_by,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::folder::Model, DbErr> {
        let now = Utc::now();
        entity::folder::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a folder with default values owned by `created_by`.
pub async fn create_folder(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::folder::Model, DbErr> {
    FolderFactory::new(db, created_by).build().await
}
