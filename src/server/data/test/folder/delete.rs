use super::*;
use crate::server::data::document::DocumentRepository;

/// Tests deleting a folder that still holds documents.
///
/// Verifies the documents survive with their folder cleared.
///
/// Expected: Ok(true), documents kept at the top level
#[tokio::test]
async fn deletes_folder_and_keeps_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let folder = factory::create_folder(db, user.id).await?;
    let document = factory::document::DocumentFactory::new(db, user.id)
        .folder_id(Some(folder.id))
        .build()
        .await?;

    let documents = DocumentRepository::new(db);
    documents.detach_from_folder(folder.id).await?;

    let repo = FolderRepository::new(db);
    let deleted = repo.delete(folder.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(folder.id).await?.is_none());
    let kept = documents.find_by_id(document.id).await?.unwrap();
    assert_eq!(kept.folder_id, None);

    Ok(())
}

/// Tests deleting a folder that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FolderRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
