//! Notification repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::notification::Notification;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        title: String,
        content: String,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets the notifications of a user, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks one notification of `user_id` as read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Updated notification
    /// - `Ok(None)` - No such notification, or it belongs to another user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if entity.read {
            return Ok(Some(Notification::from_entity(entity)));
        }

        let mut active = entity.into_active_model();
        active.read = ActiveValue::Set(true);

        Ok(Some(Notification::from_entity(active.update(self.db).await?)))
    }

    /// Marks every unread notification of `user_id` as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
