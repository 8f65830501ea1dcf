//! Folder domain models.

use chrono::{DateTime, Utc};

use crate::{model::folder::FolderDto, server::model::user::UserSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: i32,
    pub name: String,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    pub fn from_entity(entity: entity::folder::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Folder together with the user that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderWithCreator {
    pub folder: Folder,
    pub creator: UserSummary,
}

impl FolderWithCreator {
    pub fn into_dto(self) -> FolderDto {
        FolderDto {
            id: self.folder.id,
            name: self.folder.name,
            created_by: self.creator.into_dto(),
            created_at: self.folder.created_at,
            updated_at: self.folder.updated_at,
        }
    }
}
