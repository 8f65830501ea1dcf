//! Document metadata repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::document::{CreateDocumentParam, Document};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts document metadata.
    ///
    /// # Returns
    /// - `Ok(Document)` - The created document
    /// - `Err(DbErr)` - Database error, including unique violations on `name` or
    ///   `storage_path`
    pub async fn create(&self, param: CreateDocumentParam) -> Result<Document, DbErr> {
        let now = Utc::now();
        let entity = entity::document::ActiveModel {
            name: ActiveValue::Set(param.name),
            size: ActiveValue::Set(param.size),
            mime_type: ActiveValue::Set(param.mime_type),
            storage_path: ActiveValue::Set(param.storage_path),
            uploader_id: ActiveValue::Set(param.uploader_id),
            folder_id: ActiveValue::Set(param.folder_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Document::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Document::from_entity))
    }

    /// Gets documents the user uploaded or was granted access to, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `folder_id` - Restricts the result to one folder when set
    pub async fn get_visible_to(
        &self,
        user_id: i32,
        folder_id: Option<i32>,
    ) -> Result<Vec<Document>, DbErr> {
        let shared_with_user = Query::select()
            .column(entity::document_access::Column::DocumentId)
            .from(entity::document_access::Entity)
            .and_where(entity::document_access::Column::UserId.eq(user_id))
            .to_owned();

        let mut query = entity::prelude::Document::find().filter(
            Condition::any()
                .add(entity::document::Column::UploaderId.eq(user_id))
                .add(entity::document::Column::Id.in_subquery(shared_with_user)),
        );

        if let Some(folder_id) = folder_id {
            query = query.filter(entity::document::Column::FolderId.eq(folder_id));
        }

        let entities = query
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Gets every document uploaded by the user.
    pub async fn get_by_uploader(&self, user_id: i32) -> Result<Vec<Document>, DbErr> {
        let entities = entity::prelude::Document::find()
            .filter(entity::document::Column::UploaderId.eq(user_id))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Moves a document into a folder, or out of all folders with `None`.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Updated document
    /// - `Ok(None)` - No document with that ID
    pub async fn set_folder(
        &self,
        id: i32,
        folder_id: Option<i32>,
    ) -> Result<Option<Document>, DbErr> {
        let Some(entity) = entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.folder_id = ActiveValue::Set(folder_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Document::from_entity(active.update(self.db).await?)))
    }

    /// Clears the folder of every document in `folder_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of documents detached
    pub async fn detach_from_folder(&self, folder_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Document::update_many()
            .col_expr(
                entity::document::Column::FolderId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::document::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::document::Column::FolderId.eq(folder_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a document and its access list.
    ///
    /// # Returns
    /// - `Ok(true)` - Document deleted
    /// - `Ok(false)` - No document with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::DocumentAccess::delete_many()
            .filter(entity::document_access::Column::DocumentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Document::find().count(self.db).await
    }

    /// Counts documents with a non-empty access list.
    pub async fn count_shared(&self) -> Result<u64, DbErr> {
        let shared = Query::select()
            .column(entity::document_access::Column::DocumentId)
            .from(entity::document_access::Entity)
            .to_owned();

        entity::prelude::Document::find()
            .filter(entity::document::Column::Id.in_subquery(shared))
            .count(self.db)
            .await
    }
}
