//! Memo management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::memo::MemoRepository,
    error::AppError,
    model::memo::{Memo, MemoParams},
};

pub struct MemoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new memo.
    ///
    /// # Returns
    /// - `Ok(Memo)` - Created memo
    /// - `Err(AppError::BadRequest)` - Title or content missing
    pub async fn create(&self, title: String, content: String) -> Result<Memo, AppError> {
        let params = validate(title, content)?;
        let repo = MemoRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Memo>, AppError> {
        let repo = MemoRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Replaces a memo's title and content.
    ///
    /// # Returns
    /// - `Ok(Memo)` - Updated memo
    /// - `Err(AppError::BadRequest)` - Title or content missing
    /// - `Err(AppError::NotFound)` - Unknown memo
    pub async fn update(&self, id: i32, title: String, content: String) -> Result<Memo, AppError> {
        let params = validate(title, content)?;
        let repo = MemoRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Memo not found".to_string()))
    }

    /// Deletes a memo and returns it.
    pub async fn delete(&self, id: i32) -> Result<Memo, AppError> {
        let repo = MemoRepository::new(self.db);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Memo not found".to_string()))
    }
}

fn validate(title: String, content: String) -> Result<MemoParams, AppError> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() || content.is_empty() {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    Ok(MemoParams {
        title: title.to_string(),
        content: content.to_string(),
    })
}
