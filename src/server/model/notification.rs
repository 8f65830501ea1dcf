use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    /// Recipient.
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            content: self.content,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}
