//! Folder repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::{
    folder::{Folder, FolderWithCreator},
    user::UserSummary,
};

pub struct FolderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FolderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, created_by: i32) -> Result<Folder, DbErr> {
        let now = Utc::now();
        let entity = entity::folder::ActiveModel {
            name: ActiveValue::Set(name),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Folder::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Folder>, DbErr> {
        let entity = entity::prelude::Folder::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Folder::from_entity))
    }

    /// Gets one folder together with its creator.
    pub async fn find_with_creator(&self, id: i32) -> Result<Option<FolderWithCreator>, DbErr> {
        let row = entity::prelude::Folder::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.and_then(with_creator))
    }

    /// Gets all folders with their creators, ordered by name.
    pub async fn get_all_with_creator(&self) -> Result<Vec<FolderWithCreator>, DbErr> {
        let rows = entity::prelude::Folder::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::folder::Column::Name)
            .order_by_asc(entity::folder::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(with_creator).collect())
    }

    /// Renames a folder.
    ///
    /// # Returns
    /// - `Ok(Some(Folder))` - Updated folder
    /// - `Ok(None)` - No folder with that ID
    pub async fn rename(&self, id: i32, name: String) -> Result<Option<Folder>, DbErr> {
        let Some(entity) = entity::prelude::Folder::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Folder::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a folder.
    ///
    /// # Returns
    /// - `Ok(true)` - Folder deleted
    /// - `Ok(false)` - No folder with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Folder::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn with_creator(
    (folder, creator): (entity::folder::Model, Option<entity::user::Model>),
) -> Option<FolderWithCreator> {
    creator.map(|creator| FolderWithCreator {
        folder: Folder::from_entity(folder),
        creator: UserSummary::from_entity(creator),
    })
}
