//! Document upload, retrieval and sharing.
//!
//! Blobs are written before metadata. Whenever the metadata step fails the blob is
//! removed again so storage never holds bytes without a document record.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        blob::BlobStore, document::DocumentRepository,
        document_access::DocumentAccessRepository, folder::FolderRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, storage::StorageError, AppError},
    middleware::auth::require_owner_or_admin,
    model::{
        document::{
            CreateDocumentParam, Document, DocumentContent, DocumentDetails, DocumentUpload,
        },
        user::{User, UserSummary},
    },
    service::{notification::NotificationService, token::TokenService},
};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    blobs: &'a BlobStore,
    tokens: &'a TokenService,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, blobs: &'a BlobStore, tokens: &'a TokenService) -> Self {
        Self { db, blobs, tokens }
    }

    /// Records an uploaded document after its bytes were stored.
    ///
    /// The stored blob is deleted if any validation or database step fails. On success the
    /// uploader is notified.
    ///
    /// # Arguments
    /// - `uploader` - Authenticated user performing the upload
    /// - `upload` - Stored blob plus the raw form fields
    ///
    /// # Returns
    /// - `Ok(DocumentDetails)` - Created document with a signed URL
    /// - `Err(AppError::BadRequest)` - Missing name, empty file or malformed folder ID
    /// - `Err(AppError::NotFound)` - Folder does not exist
    /// - `Err(AppError::Conflict)` - A document with the same name exists
    pub async fn create(
        &self,
        uploader: &User,
        upload: DocumentUpload,
    ) -> Result<DocumentDetails, AppError> {
        let key = upload.blob.key.clone();

        match self.create_record(uploader, upload).await {
            Ok(document) => {
                NotificationService::new(self.db)
                    .notify(
                        uploader.id,
                        "Document Uploaded",
                        format!("Your document \"{}\" was uploaded successfully.", document.name),
                    )
                    .await;

                self.details(document).await
            }
            Err(err) => {
                self.remove_blob(&key).await;
                Err(err)
            }
        }
    }

    async fn create_record(
        &self,
        uploader: &User,
        upload: DocumentUpload,
    ) -> Result<Document, AppError> {
        let name = upload
            .document_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("Document name is required".to_string()))?
            .to_string();

        if upload.blob.size == 0 {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let mime_type = upload
            .document_type
            .as_deref()
            .or(upload.blob.content_type.as_deref())
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let folder_id = match upload.folder_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let id = raw
                    .parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid folderId: {}", raw)))?;
                self.ensure_folder(id).await?;
                Some(id)
            }
            _ => None,
        };

        let size = i64::try_from(upload.blob.size)
            .map_err(|_| AppError::BadRequest("Uploaded file is too large".to_string()))?;

        let repo = DocumentRepository::new(self.db);
        repo.create(CreateDocumentParam {
            name,
            size,
            mime_type,
            storage_path: upload.blob.key,
            uploader_id: uploader.id,
            folder_id,
        })
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "A document with this name already exists"))
    }

    /// Gets every document `user` uploaded or was granted access to, newest first.
    ///
    /// Each entry carries a freshly signed read URL.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `folder_id` - Restrict the list to one folder
    pub async fn get_visible(
        &self,
        user: &User,
        folder_id: Option<i32>,
    ) -> Result<Vec<DocumentDetails>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo.get_visible_to(user.id, folder_id).await?;

        self.details_many(documents).await
    }

    /// Loads the bytes of a document for download.
    ///
    /// # Returns
    /// - `Ok(DocumentContent)` - Name, content type and bytes
    /// - `Err(AppError::NotFound)` - Unknown document, or its blob is missing
    /// - `Err(AuthError::AccessDenied)` - User is neither uploader, on the access list, nor admin
    pub async fn download(&self, user: &User, id: i32) -> Result<DocumentContent, AppError> {
        let document = self.find(id).await?;

        let allowed = document.uploader_id == user.id
            || user.is_admin()
            || DocumentAccessRepository::new(self.db)
                .has_access(document.id, user.id)
                .await?;
        if !allowed {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User attempted to download document {} without access", id),
            )
            .into());
        }

        let bytes = self.blobs.read(&document.storage_path).await?;

        Ok(DocumentContent {
            name: document.name,
            mime_type: document.mime_type,
            bytes,
        })
    }

    /// Moves a document into a folder, or out of any folder when `folder_id` is `None`.
    ///
    /// # Returns
    /// - `Ok(DocumentDetails)` - Updated document
    /// - `Err(AppError::NotFound)` - Unknown document or folder
    /// - `Err(AuthError::AccessDenied)` - User is neither uploader nor admin
    pub async fn move_to_folder(
        &self,
        user: &User,
        id: i32,
        folder_id: Option<i32>,
    ) -> Result<DocumentDetails, AppError> {
        let document = self.find(id).await?;
        require_owner_or_admin(user, document.uploader_id, "move")?;

        if let Some(folder_id) = folder_id {
            self.ensure_folder(folder_id).await?;
        }

        let repo = DocumentRepository::new(self.db);
        let document = repo
            .set_folder(id, folder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        self.details(document).await
    }

    /// Deletes a document's blob and then its record.
    ///
    /// # Returns
    /// - `Ok(())` - Document removed
    /// - `Err(AppError::NotFound)` - Unknown document
    /// - `Err(AuthError::AccessDenied)` - User is neither uploader nor admin
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let document = self.find(id).await?;
        require_owner_or_admin(user, document.uploader_id, "delete")?;

        self.remove(&document).await
    }

    /// Removes the blob and record of a document without permission checks.
    ///
    /// A blob that is already gone is logged and skipped.
    pub(crate) async fn remove(&self, document: &Document) -> Result<(), AppError> {
        match self.blobs.delete(&document.storage_path).await {
            Ok(()) => {}
            Err(StorageError::NotFound(key)) => {
                tracing::warn!(
                    "Blob {} of document {} was already missing",
                    key,
                    document.id
                );
            }
            Err(err) => return Err(err.into()),
        }

        let repo = DocumentRepository::new(self.db);
        repo.delete(document.id).await?;

        Ok(())
    }

    /// Grants the user with `email` read access to a document and notifies them.
    ///
    /// # Returns
    /// - `Ok(DocumentDetails)` - Document with the updated access list
    /// - `Err(AppError::NotFound)` - Unknown document or email
    /// - `Err(AppError::BadRequest)` - Target already has access or is the uploader
    /// - `Err(AuthError::AccessDenied)` - User is neither uploader nor admin
    pub async fn share(
        &self,
        user: &User,
        id: i32,
        email: &str,
    ) -> Result<DocumentDetails, AppError> {
        let document = self.find(id).await?;
        require_owner_or_admin(user, document.uploader_id, "share")?;
        let target = self.find_user_by_email(email).await?;

        let access_repo = DocumentAccessRepository::new(self.db);
        if target.id == document.uploader_id || access_repo.has_access(id, target.id).await? {
            return Err(AppError::BadRequest("User already has access".to_string()));
        }

        access_repo
            .grant(id, target.id)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "User already has access"))?;

        NotificationService::new(self.db)
            .notify(
                target.id,
                "Document Shared",
                format!("{} shared the document \"{}\" with you.", user.name, document.name),
            )
            .await;

        self.details(document).await
    }

    /// Removes the user with `email` from a document's access list and notifies them.
    ///
    /// # Returns
    /// - `Ok(DocumentDetails)` - Document with the updated access list
    /// - `Err(AppError::NotFound)` - Unknown document or email
    /// - `Err(AppError::BadRequest)` - Target is not on the access list
    /// - `Err(AuthError::AccessDenied)` - User is neither uploader nor admin
    pub async fn revoke(
        &self,
        user: &User,
        id: i32,
        email: &str,
    ) -> Result<DocumentDetails, AppError> {
        let document = self.find(id).await?;
        require_owner_or_admin(user, document.uploader_id, "revoke access to")?;
        let target = self.find_user_by_email(email).await?;

        let access_repo = DocumentAccessRepository::new(self.db);
        if !access_repo.revoke(id, target.id).await? {
            return Err(AppError::BadRequest(
                "User does not have access".to_string(),
            ));
        }

        NotificationService::new(self.db)
            .notify(
                target.id,
                "Access Revoked",
                format!(
                    "Your access to the document \"{}\" was revoked.",
                    document.name
                ),
            )
            .await;

        self.details(document).await
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(DocumentRepository::new(self.db).count().await?)
    }

    /// Counts documents shared with at least one user.
    pub async fn count_shared(&self) -> Result<u64, AppError> {
        Ok(DocumentRepository::new(self.db).count_shared().await?)
    }

    async fn find(&self, id: i32) -> Result<Document, AppError> {
        DocumentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn ensure_folder(&self, folder_id: i32) -> Result<(), AppError> {
        match FolderRepository::new(self.db).find_by_id(folder_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Folder not found".to_string())),
        }
    }

    async fn remove_blob(&self, key: &str) {
        if let Err(err) = self.blobs.delete(key).await {
            tracing::warn!("Failed to remove blob {} after rejected upload: {}", key, err);
        }
    }

    async fn details(&self, document: Document) -> Result<DocumentDetails, AppError> {
        let mut details = self.details_many(vec![document]).await?;

        details
            .pop()
            .ok_or_else(|| AppError::InternalError("Document details went missing".to_string()))
    }

    /// Attaches uploader, access list and a signed URL to each document.
    async fn details_many(&self, documents: Vec<Document>) -> Result<Vec<DocumentDetails>, AppError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let document_ids: Vec<i32> = documents.iter().map(|d| d.id).collect();
        let mut uploader_ids: Vec<i32> = documents.iter().map(|d| d.uploader_id).collect();
        uploader_ids.sort_unstable();
        uploader_ids.dedup();

        let uploaders: HashMap<i32, UserSummary> = UserRepository::new(self.db)
            .find_by_ids(&uploader_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.summary()))
            .collect();

        let mut access: HashMap<i32, Vec<UserSummary>> = HashMap::new();
        for (document_id, user) in DocumentAccessRepository::new(self.db)
            .get_for_documents(&document_ids)
            .await?
        {
            access.entry(document_id).or_default().push(user);
        }

        documents
            .into_iter()
            .map(|document| {
                let uploader = uploaders.get(&document.uploader_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Uploader {} of document {} not found",
                        document.uploader_id, document.id
                    ))
                })?;
                let url = self
                    .tokens
                    .signed_url(&document.storage_path, &document.mime_type)?;

                Ok(DocumentDetails {
                    access: access.remove(&document.id).unwrap_or_default(),
                    uploader,
                    url,
                    document,
                })
            })
            .collect()
    }
}
