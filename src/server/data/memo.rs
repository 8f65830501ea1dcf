//! Memo repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, QueryOrder,
};

use crate::server::model::memo::{Memo, MemoParams};

pub struct MemoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MemoParams) -> Result<Memo, DbErr> {
        let now = Utc::now();
        let entity = entity::memo::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Memo::from_entity(entity))
    }

    /// Gets all memos, newest first.
    pub async fn get_all(&self) -> Result<Vec<Memo>, DbErr> {
        let entities = entity::prelude::Memo::find()
            .order_by_desc(entity::memo::Column::CreatedAt)
            .order_by_desc(entity::memo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Memo::from_entity).collect())
    }

    /// Replaces title and content of a memo.
    ///
    /// # Returns
    /// - `Ok(Some(Memo))` - Updated memo
    /// - `Ok(None)` - No memo with that ID
    pub async fn update(&self, id: i32, params: MemoParams) -> Result<Option<Memo>, DbErr> {
        let Some(entity) = entity::prelude::Memo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.title = ActiveValue::Set(params.title);
        active.content = ActiveValue::Set(params.content);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Memo::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a memo and returns it.
    ///
    /// # Returns
    /// - `Ok(Some(Memo))` - The deleted memo
    /// - `Ok(None)` - No memo with that ID
    pub async fn delete(&self, id: i32) -> Result<Option<Memo>, DbErr> {
        let Some(entity) = entity::prelude::Memo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity.clone().delete(self.db).await?;

        Ok(Some(Memo::from_entity(entity)))
    }
}
