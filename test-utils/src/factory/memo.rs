//! Memo factory for creating test memo entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MemoFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> MemoFactory<'a> {
    /// Creates a new MemoFactory titled `"Memo {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Memo {}", id),
            content: format!("Content of memo {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::memo::Model, DbErr> {
        entity::memo::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_memo(db: &DatabaseConnection) -> Result<entity::memo::Model, DbErr> {
    MemoFactory::new(db).build().await
}
