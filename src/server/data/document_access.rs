//! Document access list repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::UserSummary;

pub struct DocumentAccessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentAccessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a document's access list.
    ///
    /// # Returns
    /// - `Ok(())` - Entry created
    /// - `Err(DbErr)` - Database error, including a primary key violation when the entry
    ///   already exists
    pub async fn grant(&self, document_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::document_access::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            user_id: ActiveValue::Set(user_id),
            granted_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from a document's access list.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry removed
    /// - `Ok(false)` - User was not on the list
    pub async fn revoke(&self, document_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DocumentAccess::delete_by_id((document_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn has_access(&self, document_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let entry = entity::prelude::DocumentAccess::find_by_id((document_id, user_id))
            .one(self.db)
            .await?;

        Ok(entry.is_some())
    }

    /// Gets the access lists of several documents at once.
    ///
    /// # Returns
    /// - `Ok(Vec<(document_id, UserSummary)>)` - One pair per entry, in grant order
    pub async fn get_for_documents(
        &self,
        document_ids: &[i32],
    ) -> Result<Vec<(i32, UserSummary)>, DbErr> {
        if document_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::DocumentAccess::find()
            .filter(entity::document_access::Column::DocumentId.is_in(document_ids.iter().copied()))
            .order_by_asc(entity::document_access::Column::GrantedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, user)| {
                user.map(|user| (entry.document_id, UserSummary::from_entity(user)))
            })
            .collect())
    }
}
