//! In-app notifications.
//!
//! Notifications are side effects of other operations, so `notify` never fails the
//! calling request.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a notification to `user_id`, logging instead of returning failures.
    pub async fn notify(&self, user_id: i32, title: &str, content: String) {
        let repo = NotificationRepository::new(self.db);

        if let Err(err) = repo.create(user_id, title.to_string(), content).await {
            tracing::warn!(
                "Failed to send \"{}\" notification to user {}: {}",
                title,
                user_id,
                err
            );
        }
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.get_for_user(user_id).await?)
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Updated notification
    /// - `Err(AppError::NotFound)` - Unknown ID or owned by another user
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        repo.mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    /// Marks every notification of the user as read and returns how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.mark_all_read(user_id).await?)
    }
}
