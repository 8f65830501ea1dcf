//! Attendance repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::attendance::Attendance;

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new attendance record.
    pub async fn create(&self, user_id: i32, login_at: DateTime<Utc>) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            login_at: ActiveValue::Set(login_at),
            logout_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    /// Closes the most recent open record of the user.
    ///
    /// # Returns
    /// - `Ok(Some(Attendance))` - The closed record
    /// - `Ok(None)` - The user has no open record
    pub async fn close_latest_open(
        &self,
        user_id: i32,
        logout_at: DateTime<Utc>,
    ) -> Result<Option<Attendance>, DbErr> {
        let Some(entity) = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .filter(entity::attendance::Column::LogoutAt.is_null())
            .order_by_desc(entity::attendance::Column::LoginAt)
            .order_by_desc(entity::attendance::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.logout_at = ActiveValue::Set(Some(logout_at));

        Ok(Some(Attendance::from_entity(active.update(self.db).await?)))
    }

    /// Gets the records of a user, newest login first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Attendance>, DbErr> {
        let entities = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .order_by_desc(entity::attendance::Column::LoginAt)
            .order_by_desc(entity::attendance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Attendance::from_entity).collect())
    }
}
