use chrono::{DateTime, Utc};

use crate::model::memo::MemoDto;

/// Announcement posted by an admin and visible to every user.
#[derive(Debug, Clone, PartialEq)]
pub struct Memo {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn into_dto(self) -> MemoDto {
        MemoDto {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::memo::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated memo title and content.
#[derive(Debug, Clone)]
pub struct MemoParams {
    pub title: String,
    pub content: String,
}
