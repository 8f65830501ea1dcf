use super::*;
use chrono::{Duration, Utc};

/// Tests that a user sees their own uploads and documents shared with them, newest first.
///
/// Expected: Ok with shared and owned documents, excluding other users' private documents
#[tokio::test]
async fn returns_owned_and_shared_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    let own = factory::document::DocumentFactory::new(db, user.id)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;
    let shared = factory::document::DocumentFactory::new(db, other.id)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::grant_access(db, shared.id, user.id).await?;
    factory::create_document(db, other.id).await?;

    let repo = DocumentRepository::new(db);
    let ids: Vec<i32> = repo
        .get_visible_to(user.id, None)
        .await?
        .into_iter()
        .map(|d| d.id)
        .collect();

    assert_eq!(ids, vec![shared.id, own.id]);

    Ok(())
}

/// Tests narrowing the visible documents to a single folder.
///
/// Expected: Ok with only the document in that folder
#[tokio::test]
async fn filters_by_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let folder = factory::create_folder(db, user.id).await?;
    let inside = factory::document::DocumentFactory::new(db, user.id)
        .folder_id(Some(folder.id))
        .build()
        .await?;
    factory::create_document(db, user.id).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo.get_visible_to(user.id, Some(folder.id)).await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, inside.id);

    Ok(())
}

/// Tests visibility for a user with no documents.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_user_without_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_document(db, other.id).await?;

    let repo = DocumentRepository::new(db);

    assert!(repo.get_visible_to(user.id, None).await?.is_empty());

    Ok(())
}
